//! Hand-off of computed control values to a realtime consumer.
//!
//! A control thread samples bindings at its leisure and pushes frames;
//! the realtime side pops them without locks or allocation.

#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};

use crate::timing::ClockTime;

/// One computed control value, stamped with the time it applies at.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ControlFrame {
    pub timestamp: ClockTime,
    pub value: f64,
}

/// Receiving side of a control hand-off.
pub trait FrameReceiver {
    fn pop(&mut self) -> Option<ControlFrame>;
}

#[cfg(feature = "rtrb")]
impl FrameReceiver for Consumer<ControlFrame> {
    fn pop(&mut self) -> Option<ControlFrame> {
        Consumer::pop(self).ok()
    }
}

/// Lock-free SPSC channel for control frames.
#[cfg(feature = "rtrb")]
pub fn frame_channel(capacity: usize) -> (Producer<ControlFrame>, Consumer<ControlFrame>) {
    RingBuffer::new(capacity)
}

#[cfg(all(test, feature = "rtrb"))]
mod tests {
    use super::*;

    #[test]
    fn frames_arrive_in_order() {
        let (mut tx, mut rx) = frame_channel(8);
        for i in 0..3u64 {
            tx.push(ControlFrame {
                timestamp: ClockTime::from_millis(i * 10),
                value: i as f64,
            })
            .unwrap();
        }

        let mut last = None;
        while let Some(frame) = FrameReceiver::pop(&mut rx) {
            if let Some(prev) = last {
                assert!(frame.timestamp > prev);
            }
            last = Some(frame.timestamp);
        }
        assert_eq!(last, Some(ClockTime::from_millis(20)));
    }

    #[test]
    fn empty_channel_pops_none() {
        let (_tx, mut rx) = frame_channel(4);
        assert_eq!(FrameReceiver::pop(&mut rx), None);
    }
}
