//! Frame cycling for sprite-sheet animation.

/// Steps through the frames of one sheet row at a fixed delay.
#[derive(Debug, Clone)]
pub struct FrameAnimator {
    /// Current frame index.
    pub frame: u32,
    /// Number of frames in the active strip.
    pub frame_count: u32,
    /// Seconds per frame.
    pub delay: f32,
    /// Time accumulated in the current frame.
    pub timer: f32,
    /// Wrap around at the ends instead of holding the last frame.
    pub looping: bool,
    /// Play frames last-to-first (used for mirrored sheets).
    pub reverse: bool,
}

impl FrameAnimator {
    pub fn new(frame_count: u32, delay: f32) -> Self {
        Self {
            frame: 0,
            frame_count: frame_count.max(1),
            delay,
            timer: 0.0,
            looping: true,
            reverse: false,
        }
    }

    /// Switch to a new strip. The current frame is kept if it still fits.
    pub fn set_strip(&mut self, frame_count: u32, reverse: bool) {
        self.frame_count = frame_count.max(1);
        self.reverse = reverse;
        if self.frame >= self.frame_count {
            self.frame = 0;
        }
    }

    /// Advance by dt seconds. Returns true if the frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.timer += dt;
        if self.delay <= 0.0 || self.timer < self.delay {
            return false;
        }
        self.timer = 0.0;

        let n = self.frame_count;
        let prev = self.frame;
        self.frame = match (self.reverse, self.looping) {
            (false, true) => (self.frame + 1) % n,
            (false, false) => (self.frame + 1).min(n - 1),
            (true, true) => (self.frame + n - 1) % n,
            (true, false) => self.frame.saturating_sub(1),
        };
        self.frame != prev
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_once_per_delay() {
        let mut anim = FrameAnimator::new(4, 0.2);
        assert!(!anim.tick(0.1));
        assert_eq!(anim.frame, 0);
        assert!(anim.tick(0.1));
        assert_eq!(anim.frame, 1);
    }

    #[test]
    fn loops_forward_and_backward() {
        let mut anim = FrameAnimator::new(3, 0.1);
        for _ in 0..3 {
            anim.tick(0.1);
        }
        assert_eq!(anim.frame, 0);

        anim.set_strip(3, true);
        anim.tick(0.1);
        assert_eq!(anim.frame, 2);
    }

    #[test]
    fn non_looping_holds_last_frame() {
        let mut anim = FrameAnimator::new(2, 0.1);
        anim.looping = false;
        anim.tick(0.1);
        assert!(!anim.tick(0.1));
        assert_eq!(anim.frame, 1);
    }

    #[test]
    fn shorter_strip_resets_out_of_range_frame() {
        let mut anim = FrameAnimator::new(6, 0.1);
        anim.frame = 5;
        anim.set_strip(4, false);
        assert_eq!(anim.frame, 0);
    }
}
