//! Signal classification.
//!
//! A SKU's current stock is banded against its buffer by an ordered ladder of
//! conditions; the first one that holds wins:
//!
//! 1. `C > B`          -> No Action
//! 2. `C > (2/3)·B`    -> Green   (with `C <= B` from rule 1 failing)
//! 3. `C > (1/3)·B`    -> Yellow
//! 4. `C > 0.05·B`     -> Red
//! 5. otherwise        -> Black
//!
//! The lower bounds are strict, so stock sitting exactly on an edge falls into
//! the band below it: `C = B` is Green, `C = (2/3)·B` is Yellow, `C = (1/3)·B`
//! is Red, `C = 0.05·B` is Black.

use crate::domain::Signal;

/// Band `current` stock against `buffer` stock.
///
/// Total over non-negative inputs: exactly one band holds for any pair.
///
/// The fractional edges are compared cross-multiplied (`3·C > 2·B` rather
/// than `C > (2/3)·B`) so the edge cases above land on the documented side
/// instead of drifting with the rounding of `2/3` in binary.
///
/// A zero buffer (no demand history, or a zero-policy fallback) degenerates
/// to: any positive stock is No Action, zero stock is Black. Callers joining
/// against a defaulted buffer should read those as "no signal available",
/// not as a health assessment.
pub fn classify(current: f64, buffer: f64) -> Signal {
    if current > buffer {
        Signal::NoAction
    } else if 3.0 * current > 2.0 * buffer {
        Signal::Green
    } else if 3.0 * current > buffer {
        Signal::Yellow
    } else if 20.0 * current > buffer {
        Signal::Red
    } else {
        Signal::Black
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_with_buffer_300() {
        assert_eq!(classify(301.0, 300.0), Signal::NoAction);
        assert_eq!(classify(250.0, 300.0), Signal::Green);
        assert_eq!(classify(150.0, 300.0), Signal::Yellow);
        assert_eq!(classify(50.0, 300.0), Signal::Red);
        assert_eq!(classify(10.0, 300.0), Signal::Black);
        assert_eq!(classify(0.0, 300.0), Signal::Black);
    }

    #[test]
    fn edges_fall_into_the_lower_band() {
        // C = B, C = (2/3)·B, C = (1/3)·B, C = 0.05·B with B = 300.
        assert_eq!(classify(300.0, 300.0), Signal::Green);
        assert_eq!(classify(200.0, 300.0), Signal::Yellow);
        assert_eq!(classify(100.0, 300.0), Signal::Red);
        assert_eq!(classify(15.0, 300.0), Signal::Black);
    }

    #[test]
    fn zero_buffer_degenerates() {
        assert_eq!(classify(0.0, 0.0), Signal::Black);
        assert_eq!(classify(5.0, 0.0), Signal::NoAction);
    }

    #[test]
    fn every_pair_gets_exactly_one_band() {
        // classify is a single if/else ladder, so it always returns; this
        // sweep checks the bands tile the domain in the right order.
        let buffers = [0.0, 1.0, 37.5, 300.0, 1e6];
        for &b in &buffers {
            let mut last = classify(0.0, b);
            let mut c = 0.0;
            while c <= b * 1.5 + 1.0 {
                let s = classify(c, b);
                // Urgency can only decrease as stock grows.
                assert!(rank(s) <= rank(last), "band went up at c={c}, b={b}");
                last = s;
                c += (b / 997.0).max(0.01);
            }
        }
    }

    fn rank(s: Signal) -> u8 {
        match s {
            Signal::NoAction => 0,
            Signal::Green => 1,
            Signal::Yellow => 2,
            Signal::Red => 3,
            Signal::Black => 4,
        }
    }

    #[test]
    fn display_hints_are_fixed() {
        assert_eq!(Signal::NoAction.fill_color(), "white");
        assert_eq!(Signal::Green.fill_color(), "#2ecc71");
        assert_eq!(Signal::Yellow.fill_color(), "#f1c40f");
        assert_eq!(Signal::Red.fill_color(), "#e74c3c");
        assert_eq!(Signal::Black.fill_color(), "#000000");
        assert_eq!(Signal::Black.text_color(), "white");
        assert_eq!(Signal::Green.text_color(), "black");
    }
}
