//! Frame-by-frame animation playback.
//!
//! A `FrameCursor` only knows which frame is showing and how long it has been
//! showing; the frame list itself lives with the entity that owns the cursor.

/// Playback position inside a frame sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCursor {
    pub index: usize,
    timer: u32,
    /// Ticks each frame stays on screen
    pub delay: u32,
}

/// Outcome of advancing a one-shot animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShot {
    Playing,
    Finished,
}

impl FrameCursor {
    pub fn new(delay: u32) -> Self {
        Self {
            index: 0,
            timer: 0,
            delay: delay.max(1),
        }
    }

    /// Back to the first frame with a fresh timer
    pub fn reset(&mut self) {
        self.index = 0;
        self.timer = 0;
    }

    /// Count one tick; true when the current frame's delay has elapsed
    fn tick(&mut self) -> bool {
        self.timer += 1;
        if self.timer >= self.delay {
            self.timer = 0;
            true
        } else {
            false
        }
    }

    /// Advance a looping animation of `frame_count` frames
    pub fn advance_looping(&mut self, frame_count: usize) {
        if frame_count == 0 {
            self.reset();
            return;
        }
        if self.tick() {
            self.index = (self.index + 1) % frame_count;
        }
    }

    /// Advance a one-shot animation. The last frame is shown for a full delay,
    /// then the cursor reports `Finished` and rewinds to frame 0.
    pub fn advance_once(&mut self, frame_count: usize) -> OneShot {
        if frame_count == 0 {
            self.reset();
            return OneShot::Finished;
        }
        if !self.tick() {
            return OneShot::Playing;
        }
        if self.index + 1 < frame_count {
            self.index += 1;
            OneShot::Playing
        } else {
            self.reset();
            OneShot::Finished
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_looping_wraps_and_stays_in_bounds() {
        let mut cursor = FrameCursor::new(2);
        let mut seen = Vec::new();
        for _ in 0..20 {
            cursor.advance_looping(3);
            assert!(cursor.index < 3);
            seen.push(cursor.index);
        }
        assert_eq!(&seen[..8], &[0, 1, 1, 2, 2, 0, 0, 1]);
    }

    #[test]
    fn test_one_shot_never_wraps() {
        let mut cursor = FrameCursor::new(1);
        let mut last = 0;
        let mut finished_after = None;
        for tick in 1..=10 {
            match cursor.advance_once(4) {
                OneShot::Playing => {
                    assert!(cursor.index >= last, "index went backwards");
                    assert!(cursor.index < 4);
                    last = cursor.index;
                }
                OneShot::Finished => {
                    finished_after = Some(tick);
                    break;
                }
            }
        }
        assert_eq!(last, 3);
        assert_eq!(finished_after, Some(4));
        assert_eq!(cursor.index, 0);
    }

    #[test]
    fn test_empty_sequence_is_harmless() {
        let mut cursor = FrameCursor::new(3);
        cursor.advance_looping(0);
        assert_eq!(cursor.index, 0);
        assert_eq!(cursor.advance_once(0), OneShot::Finished);
    }

    #[test]
    fn test_zero_delay_is_treated_as_one() {
        let mut cursor = FrameCursor::new(0);
        cursor.advance_looping(5);
        assert_eq!(cursor.index, 1);
    }
}
