//! # baxter-rs: combinatorial objects in Rust
//!
//! **`baxter-rs`** is a small engine for exhaustive combinatorics: a
//! canonical algebra for permutations in disjoint-cycle form, lazy
//! generators for the classical object families, and an array-indexed
//! binary-search-tree toolkit built around Baxter permutations.
//!
//! ## What is a Baxter permutation?
//!
//! A permutation is **Baxter** when no adjacent pair of values `(i, i+1)`
//! "crosses": between the positions of `i` and `i+1` there is never a value
//! below `i` on the wrong side of a value above `i`. Baxter permutations are
//! in bijection with twin binary trees, and Knuth's twin-tree algorithm
//! turns *any* permutation into one. That conversion, together with the
//! structural checker, is the heart of this crate.
//!
//! ## Key Features
//!
//! - **Canonical cycle algebra**: [`Permutation`][crate::perm::Permutation]
//!   keeps every permutation in its unique canonical disjoint-cycle form
//!   under composition, inversion and parsing.
//! - **Exact enumeration orders**: the three generators reproduce the
//!   classical successor orders: lexicographic for permutations,
//!   revolving-door (Knuth 7.2.1.3 R) for k-subsets, and TAOCP 7.2.1.6 P
//!   for balanced brackets. The order is part of the contract, not just
//!   the set.
//! - **Arena trees**: [`TabTree`][crate::tabtree::TabTree] stores topology
//!   in parallel index arrays (no pointers, no recursion) and round-trips
//!   through a pre-order bracket encoding.
//! - **Explicit domains**: values live in an immutable
//!   [`Domain`][crate::domain::Domain] bound passed by reference; there is
//!   no process-wide state anywhere in the crate.
//!
//! ## Basic Usage
//!
//! ```rust
//! use baxter_rs::baxter::is_baxter_seq;
//! use baxter_rs::domain::Domain;
//! use baxter_rs::perm::Permutation;
//! use baxter_rs::twin::TwinTree;
//!
//! // Canonicalize a permutation given as cycles.
//! let dom = Domain::new(6);
//! let p = Permutation::parse_loops(dom, "(3 1 6)(5 4)").unwrap();
//! assert_eq!(p.to_string(), "(4 5)(2)(1 6 3)");
//!
//! // Turn a non-Baxter permutation into a Baxter one.
//! assert!(!is_baxter_seq(&[2, 4, 1, 3]));
//! let twin = TwinTree::from_perm(&[2, 4, 1, 3]).unwrap();
//! let baxters = twin.into_baxters();
//! assert!(is_baxter_seq(&baxters));
//! ```
//!
//! ## Core Components
//!
//! - **[`perm`]** (with [`cycle`] and [`domain`]): the permutation algebra.
//! - **[`permgen`]**, **[`combgen`]**, **[`bracegen`]**: the exhaustive
//!   generators, with [`counts`] providing the exact reference counts.
//! - **[`tabtree`]**, **[`twin`]**, **[`baxter`]**: trees and the Baxter
//!   machinery.

pub mod baxter;
pub mod bracegen;
pub mod combgen;
pub mod counts;
pub mod cycle;
pub mod dice;
pub mod domain;
pub mod error;
pub mod perm;
pub mod permgen;
pub mod tabtree;
pub mod twin;
