use std::sync::atomic::{AtomicBool, Ordering};

use palette::named;

use crate::color::OFF;
use crate::effects::Effect;
use crate::pixelbuffer::Strip;

/// Plays a fixed list of effects over and over.
pub struct Sequencer {
    show: Vec<Effect>,
}

impl Sequencer {
    pub fn new(show: Vec<Effect>) -> Sequencer {
        Sequencer { show }
    }

    pub fn len(&self) -> usize {
        self.show.len()
    }

    /// The built-in show for a strip of `pixel_count` slots.
    pub fn default_show(pixel_count: usize) -> Vec<Effect> {
        let full = Some(pixel_count);
        let mut show = vec![];

        for delay_ms in [50, 40, 30, 20, 10, 5] {
            show.push(Effect::MoveOutsideIn {
                extent: full,
                foreground: named::BLUE,
                background: OFF,
                delay_ms,
            });
        }

        show.push(Effect::FillMiddleOut {
            extent: full,
            color: named::YELLOW,
            delay_ms: 15,
        });
        show.push(Effect::Clear { delay_ms: 0 });

        for sixths in (1..=6).rev() {
            show.push(Effect::Equaliser {
                top: Some(pixel_count * sixths / 6),
                peak: named::RED,
                bar: named::GREEN,
                delay_ms: 5,
            });
        }

        show.push(Effect::FillBottomToTop {
            extent: full,
            color: named::RED,
            delay_ms: 10,
        });
        show.push(Effect::FillOutsideIn {
            extent: full,
            color: named::WHITE,
            delay_ms: 10,
        });
        show.push(Effect::FillTopToBottom {
            extent: full,
            color: named::RED,
            delay_ms: 10,
        });
        show.push(Effect::Clear { delay_ms: 0 });

        for delay_ms in [30, 20, 10] {
            show.push(Effect::MoveBottomToTop {
                extent: full,
                foreground: named::WHITE,
                background: OFF,
                delay_ms,
            });
            show.push(Effect::MoveTopToBottom {
                extent: full,
                foreground: named::WHITE,
                background: OFF,
                delay_ms,
            });
        }

        show.push(Effect::MoveMiddleOut {
            extent: full,
            foreground: named::VIOLET,
            background: OFF,
            delay_ms: 20,
        });
        show.push(Effect::Chase {
            color: named::ORANGE,
            iterations: 30,
            delay_ms: 100,
        });
        show.push(Effect::Rainbow { delay_ms: 20 });
        show.push(Effect::Clear { delay_ms: 500 });

        show
    }

    /// Plays the show once. Returns `false` if `stop` was raised on the way;
    /// the flag is checked between effects, a running effect always completes.
    pub fn play(&self, strip: &mut Strip, stop: &AtomicBool) -> bool {
        for effect in &self.show {
            if stop.load(Ordering::SeqCst) {
                return false;
            }
            log::trace!("{:?}", effect);
            effect.apply(strip);
        }
        true
    }

    pub fn run_until(&self, strip: &mut Strip, stop: &AtomicBool) {
        let mut passes: u64 = 0;
        while self.play(strip, stop) {
            passes += 1;
            log::debug!("Finished pass {}", passes);
        }
        log::info!("Stopped after {} complete passes", passes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::rgb;
    use crate::pixelbuffer::testing::recording_strip;

    #[test]
    fn default_show_fits_the_strip() {
        for pixel_count in [1, 7, 60, 150] {
            let show = Sequencer::default_show(pixel_count);
            assert!(show
                .iter()
                .filter_map(Effect::extent)
                .all(|extent| extent <= pixel_count));
        }
    }

    #[test]
    fn default_show_opens_with_six_converging_passes() {
        let show = Sequencer::default_show(150);
        let delays: Vec<u32> = show[..6]
            .iter()
            .map(|effect| match effect {
                Effect::MoveOutsideIn { delay_ms, .. } => *delay_ms,
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(delays, vec![50, 40, 30, 20, 10, 5]);
        assert!(matches!(show[6], Effect::FillMiddleOut { .. }));
        assert!(matches!(show[7], Effect::Clear { .. }));
    }

    #[test]
    fn equaliser_passes_shrink() {
        let tops: Vec<usize> = Sequencer::default_show(150)
            .iter()
            .filter_map(|effect| match effect {
                Effect::Equaliser { top, .. } => *top,
                _ => None,
            })
            .collect();
        assert_eq!(tops, vec![150, 125, 100, 75, 50, 25]);
    }

    #[test_log::test]
    fn plays_every_effect_in_order() {
        let (mut strip, output, delay) = recording_strip(4);
        let sequencer = Sequencer::new(vec![
            Effect::FillBottomToTop {
                extent: Some(2),
                color: rgb(9, 0, 0),
                delay_ms: 1,
            },
            Effect::Clear { delay_ms: 2 },
        ]);
        assert!(sequencer.play(&mut strip, &AtomicBool::new(false)));
        assert_eq!(output.frame_count(), 3);
        assert_eq!(delay.waits(), vec![1, 1, 2]);
        assert_eq!(output.frames()[2], vec![OFF; 4]);
    }

    #[test]
    fn raised_flag_stops_before_the_next_effect() {
        let (mut strip, output, _) = recording_strip(4);
        let sequencer = Sequencer::new(vec![Effect::Clear { delay_ms: 0 }]);
        let stop = AtomicBool::new(true);
        assert!(!sequencer.play(&mut strip, &stop));
        sequencer.run_until(&mut strip, &stop);
        assert_eq!(output.frame_count(), 0);
    }

    #[test]
    fn full_default_show_runs_on_a_short_strip() {
        let (mut strip, output, _) = recording_strip(7);
        let sequencer = Sequencer::new(Sequencer::default_show(7));
        assert!(sequencer.play(&mut strip, &AtomicBool::new(false)));
        assert!(output.frame_count() > 0);
        assert_eq!(output.frames().last(), Some(&vec![OFF; 7]));
    }
}
