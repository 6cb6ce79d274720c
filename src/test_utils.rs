pub const DEPOTS_DOMAIN_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/depots/domain.pddl"
));

pub const DEPOTS_PROBLEM01_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/depots/p01.pddl"
));

pub const BLOCKS_DOMAIN_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/blocks/domain.pddl"
));

pub const BLOCKS_PROBLEM_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/blocks/p01.pddl"
));

/// A single action `move(?a - block)` that consumes `(clear ?a)` to produce
/// `(moved ?a)`.
pub const MOVE_DOMAIN_TEXT: &str = r#"
(define (domain move-blocks)
  (:requirements :strips :typing)
  (:types block)
  (:predicates (clear ?a - block) (moved ?a - block))
  (:action move
    :parameters (?a - block)
    :precondition (clear ?a)
    :effect (and (moved ?a) (not (clear ?a)))))
"#;

pub const MOVE_PROBLEM_TEXT: &str = r#"
(define (problem move-two)
  (:domain move-blocks)
  (:objects b1 b2 - block)
  (:init (clear b1) (clear b2))
  (:goal (and (moved b1) (moved b2))))
"#;
