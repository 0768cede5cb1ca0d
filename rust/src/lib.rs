//! Array rotation exercises. The heart of the crate is [`rotation::rotate_right`],
//! which rotates a sequence to the right with wraparound; the remaining modules
//! render results, load configuration, and run judge-style batches of cases.

pub mod batch;
pub mod config;
pub mod render;
pub mod rotation;

pub const DEMO_SEQUENCE: [i64; 5] = [1, 2, 3, 4, 5];
pub const DEMO_OFFSET: usize = 4;

/// The line printed by the demonstration run: `2 3 4 5 1`.
pub fn demo_line() -> String {
    render::render_spaced(&rotation::rotate_right(&DEMO_SEQUENCE, DEMO_OFFSET))
}

#[cfg(test)]
mod tests {
    use super::demo_line;

    #[test]
    fn demo_prints_reference_line() {
        assert_eq!(demo_line(), "2 3 4 5 1");
    }
}
