//! Public library API for flattening, matching, and containment checks over generic value trees.

/// Generic value model plus the flatten, match, and contains walkers.
pub mod tree;
