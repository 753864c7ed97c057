/// Folds the requests gathered during one loop turn into at most one
/// terminal resize and one frame.
pub struct Coalescer;

impl Coalescer {
    /// Draw when anything asked for a frame: a queued request from `update`,
    /// an input event, or a resize that was just applied.
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, forced: bool) -> bool {
        queued_render_reqs > 0 || forced
    }

    /// The size the terminal should be resized to, if any.
    ///
    /// Only the last reported size counts, and it is dropped when the
    /// terminal already has it.
    #[inline]
    pub fn decide_resize(
        current: Option<(u16, u16)>,
        reported: &[(u16, u16)],
    ) -> Option<(u16, u16)> {
        reported
            .last()
            .copied()
            .filter(|size| current != Some(*size))
    }
}

#[cfg(test)]
mod tests {
    use super::Coalescer;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_needs_a_reason() {
        assert!(!Coalescer::decide_render(0, false));
        assert!(Coalescer::decide_render(3, false));
        assert!(Coalescer::decide_render(0, true));
    }

    #[test]
    fn test_resize_keeps_the_last_new_size() {
        assert_eq!(Coalescer::decide_resize(None, &[]), None);
        assert_eq!(Coalescer::decide_resize(Some((80, 24)), &[]), None);
        assert_eq!(
            Coalescer::decide_resize(None, &[(80, 24), (120, 40)]),
            Some((120, 40))
        );
        assert_eq!(
            Coalescer::decide_resize(Some((80, 24)), &[(120, 40), (80, 24)]),
            None
        );
    }
}
