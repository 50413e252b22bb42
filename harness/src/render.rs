//! Text rendering of a solved tree.
//!
//! Walks from the root through flagged children only. Each step prints the
//! ride that produced it (omitted for the root), the boat's bank, and the
//! origin-bank counts. The two state lines are tab-indented:
//!
//! ```text
//! =========================================================
//!
//! A Cannibal and a Cannibal riding to DESTINATION
//!
//!     Boat is now at: DESTINATION
//!     Origin Bank State: Missionaries: 3, Cannibals: 1
//! ```

use std::fmt::Write;

use ferry_kernel::model::rider::Ride;
use ferry_search::node::TreeNode;

/// Separator printed before every step.
pub const SEPARATOR: &str = "=========================================================";

/// Line appended when the root carries no solution flag.
pub const NO_SOLUTION: &str = "No solution found.";

/// Render the flagged path below `root`.
///
/// The root is always rendered. If it is not flagged, only the root is
/// shown, followed by [`NO_SOLUTION`].
#[must_use]
pub fn render_path(root: &TreeNode) -> String {
    let mut out = String::new();
    render_step(&mut out, root);

    if !root.is_on_solution_path() {
        out.push('\n');
        out.push_str(NO_SOLUTION);
        out.push('\n');
        return out;
    }

    let mut current = root;
    while let Some(next) = current.flagged_child() {
        render_step(&mut out, next);
        current = next;
    }
    out
}

/// `"A Missionary and a Cannibal"`. Empty for the empty ride.
#[must_use]
pub fn describe_ride(ride: Ride) -> String {
    let names: Vec<&str> = ride.riders().iter().map(|r| r.as_str()).collect();
    if names.is_empty() {
        return String::new();
    }
    format!("A {}", names.join(" and a "))
}

fn render_step(out: &mut String, node: &TreeNode) {
    let config = node.configuration();
    let _ = writeln!(out, "{SEPARATOR}\n");
    if !node.ride().is_empty() {
        let _ = writeln!(
            out,
            "{} riding to {}\n",
            describe_ride(node.ride()),
            config.boat()
        );
    }
    let _ = writeln!(out, "\tBoat is now at: {}", config.boat());
    let _ = writeln!(
        out,
        "\tOrigin Bank State: Missionaries: {}, Cannibals: {}",
        config.missionaries(),
        config.cannibals()
    );
}
