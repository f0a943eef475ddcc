//! Foreground controller
//!
//! The controller is the single owner of every output: the LED matrix, the
//! indicator pins and the text display. Producers (serial receive, button
//! edge handlers) only queue [`Event`]s; all side effects happen here, one
//! event at a time, so there is never more than one writer to the display
//! or the pixel buffer.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;
use glyphpad_hal::{OutputPin, SignalChannel};
use heapless::String;

use crate::config::{CHAR_TEXT_POS, LIT_COLOR, MAX_TEXT_LEN, STATUS_TEXT_POS};
use crate::input::{ButtonId, Event, Transition};
use crate::matrix::{render_digit, Digit, MatrixBuffer};
use crate::traits::{DisplayError, TextDisplay, TextDisplayExt};
use crate::transmit::Transmitter;

/// What the controller did with an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Digit drawn on the matrix and sent to the LEDs
    Rendered(Digit),
    /// Printable non-digit, shown on the display only
    Echoed(char),
    /// Control character, nothing done
    Ignored(char),
    /// Indicator updated
    Toggled(Transition),
}

/// Result of handling one event
///
/// Display failures are reported here instead of aborting the event; the
/// matrix and pins are updated regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    pub outcome: Outcome,
    pub display: Result<(), DisplayError>,
}

/// Owner of all application outputs
pub struct Controller<D, P, C, Dl>
where
    D: TextDisplay,
    P: OutputPin,
    C: SignalChannel,
    Dl: DelayNs,
{
    display: D,
    green: P,
    blue: P,
    frame: MatrixBuffer,
    transmitter: Transmitter<C, Dl>,
}

impl<D, P, C, Dl> Controller<D, P, C, Dl>
where
    D: TextDisplay,
    P: OutputPin,
    C: SignalChannel,
    Dl: DelayNs,
{
    /// Take ownership of the outputs and drive both indicators low
    pub fn new(display: D, mut green: P, mut blue: P, transmitter: Transmitter<C, Dl>) -> Self {
        green.set_low();
        blue.set_low();
        Self {
            display,
            green,
            blue,
            frame: MatrixBuffer::new(),
            transmitter,
        }
    }

    /// Blank the matrix
    pub fn clear_matrix(&mut self) {
        self.frame.clear();
        self.transmitter.send(&self.frame);
    }

    /// Apply one event
    pub fn handle(&mut self, event: Event) -> Report {
        match event {
            Event::Char(c) => self.handle_char(c),
            Event::Toggled(transition) => self.handle_toggle(transition),
        }
    }

    fn handle_char(&mut self, c: char) -> Report {
        if c.is_control() {
            return Report {
                outcome: Outcome::Ignored(c),
                display: Ok(()),
            };
        }

        let display = self.show_formatted(CHAR_TEXT_POS, format_args!("Number {}", c));

        let outcome = match Digit::from_char(c) {
            Some(digit) => {
                render_digit(&mut self.frame, digit, LIT_COLOR);
                self.transmitter.send(&self.frame);
                Outcome::Rendered(digit)
            }
            None => Outcome::Echoed(c),
        };

        Report { outcome, display }
    }

    fn handle_toggle(&mut self, transition: Transition) -> Report {
        self.indicator_mut(transition.button).set_state(transition.on);

        let state = if transition.on { "on" } else { "off" };
        let display = self.show_formatted(
            STATUS_TEXT_POS,
            format_args!("{} {}", transition.button.indicator(), state),
        );

        Report {
            outcome: Outcome::Toggled(transition),
            display,
        }
    }

    fn show_formatted(
        &mut self,
        pos: (u8, u8),
        args: core::fmt::Arguments<'_>,
    ) -> Result<(), DisplayError> {
        let mut text: String<MAX_TEXT_LEN> = String::new();
        text.write_fmt(args).map_err(|_| DisplayError::TextTooLong)?;
        self.display.show_at(&text, pos)
    }

    fn indicator_mut(&mut self, button: ButtonId) -> &mut P {
        match button {
            ButtonId::A => &mut self.green,
            ButtonId::B => &mut self.blue,
        }
    }

    /// Current indicator level for a button
    pub fn indicator(&self, button: ButtonId) -> bool {
        match button {
            ButtonId::A => self.green.is_set_high(),
            ButtonId::B => self.blue.is_set_high(),
        }
    }

    /// Last rendered frame
    pub fn frame(&self) -> &MatrixBuffer {
        &self.frame
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn transmitter(&self) -> &Transmitter<C, Dl> {
        &self.transmitter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Debouncer;
    use crate::mock::{MockDelay, MockDisplay, MockPin, RecordingChannel};

    type TestController = Controller<MockDisplay, MockPin, RecordingChannel, MockDelay>;

    fn controller() -> TestController {
        controller_with(MockDisplay::new())
    }

    fn controller_with(display: MockDisplay) -> TestController {
        Controller::new(
            display,
            MockPin::new(),
            MockPin::new(),
            Transmitter::new(RecordingChannel::new(), MockDelay::new()),
        )
    }

    #[test]
    fn test_new_drives_indicators_low() {
        let ctrl = controller();
        assert!(!ctrl.indicator(ButtonId::A));
        assert!(!ctrl.indicator(ButtonId::B));
        assert_eq!(ctrl.green.writes, 1);
        assert_eq!(ctrl.blue.writes, 1);
    }

    #[test]
    fn test_digit_three_end_to_end() {
        let mut ctrl = controller();
        let report = ctrl.handle(Event::Char('3'));

        assert_eq!(report.outcome, Outcome::Rendered(Digit::new(3).unwrap()));
        assert_eq!(report.display, Ok(()));

        let lit: heapless::Vec<usize, 25> = ctrl.frame().lit_indices().collect();
        assert_eq!(lit.as_slice(), &[1, 2, 3, 8, 11, 12, 18, 21, 22, 23]);

        let words = &ctrl.transmitter().channel().words;
        assert_eq!(words.len(), 75);
        for (i, triple) in words.chunks(3).enumerate() {
            let expected = if lit.contains(&i) { [0u8, 40, 0] } else { [0, 0, 0] };
            assert_eq!(triple, expected, "pixel {}", i);
        }
        assert_eq!(ctrl.transmitter().delay().total_ns, 100_000);

        assert_eq!(ctrl.display().last_text(), Some("Number 3"));
        assert_eq!(ctrl.display().last_pos(), Some((0, 0)));
    }

    #[test]
    fn test_letter_echoed_not_rendered() {
        let mut ctrl = controller();
        ctrl.handle(Event::Char('1'));
        let report = ctrl.handle(Event::Char('x'));

        assert_eq!(report.outcome, Outcome::Echoed('x'));
        assert_eq!(ctrl.display().last_text(), Some("Number x"));
        // Matrix keeps the previous digit and nothing new was sent
        assert_eq!(ctrl.frame().lit_indices().count(), 8);
        assert_eq!(ctrl.transmitter().channel().words.len(), 75);
    }

    #[test]
    fn test_control_char_ignored() {
        let mut ctrl = controller();
        let report = ctrl.handle(Event::Char('\r'));

        assert_eq!(report.outcome, Outcome::Ignored('\r'));
        assert!(ctrl.display().shown.is_empty());
        assert!(ctrl.transmitter().channel().words.is_empty());
    }

    #[test]
    fn test_button_a_scenario() {
        let mut ctrl = controller();
        let mut deb = Debouncer::new(ButtonId::A);

        let first = deb.on_falling_edge(0).unwrap();
        let report = ctrl.handle(first.into());
        assert_eq!(report.outcome, Outcome::Toggled(first));
        assert!(ctrl.indicator(ButtonId::A));
        assert_eq!(ctrl.display().last_text(), Some("Green on"));
        assert_eq!(ctrl.display().last_pos(), Some((0, 10)));

        assert!(deb.on_falling_edge(150).is_none());

        let second = deb.on_falling_edge(450).unwrap();
        ctrl.handle(second.into());
        assert!(!ctrl.indicator(ButtonId::A));
        assert_eq!(ctrl.display().last_text(), Some("Green off"));

        assert!(!ctrl.indicator(ButtonId::B));
        assert_eq!(ctrl.display().shown.len(), 2);
    }

    #[test]
    fn test_button_b_drives_blue() {
        let mut ctrl = controller();
        let mut deb = Debouncer::new(ButtonId::B);

        ctrl.handle(deb.on_falling_edge(10).unwrap().into());
        assert!(ctrl.indicator(ButtonId::B));
        assert!(!ctrl.indicator(ButtonId::A));
        assert_eq!(ctrl.display().last_text(), Some("Blue on"));

        ctrl.handle(deb.on_falling_edge(1000).unwrap().into());
        assert_eq!(ctrl.display().last_text(), Some("Blue off"));
    }

    #[test]
    fn test_display_error_does_not_block_outputs() {
        let mut ctrl = controller_with(MockDisplay::failing(DisplayError::Bus));

        let report = ctrl.handle(Event::Char('0'));
        assert_eq!(report.display, Err(DisplayError::Bus));
        assert_eq!(report.outcome, Outcome::Rendered(Digit::new(0).unwrap()));
        assert_eq!(ctrl.transmitter().channel().words.len(), 75);

        let t = Transition {
            button: ButtonId::A,
            on: true,
            at_ms: 0,
        };
        let report = ctrl.handle(Event::Toggled(t));
        assert_eq!(report.display, Err(DisplayError::Bus));
        assert!(ctrl.indicator(ButtonId::A));
    }

    #[test]
    fn test_last_event_wins_on_display() {
        let mut ctrl = controller();
        ctrl.handle(Event::Char('5'));
        ctrl.handle(Event::Toggled(Transition {
            button: ButtonId::B,
            on: true,
            at_ms: 3,
        }));
        assert_eq!(ctrl.display().last_text(), Some("Blue on"));
        // Matrix still shows the digit
        assert_eq!(
            ctrl.frame().lit_indices().count() as u32,
            Digit::new(5).unwrap().glyph().lit_count()
        );
    }

    #[test]
    fn test_clear_matrix_sends_black_frame() {
        let mut ctrl = controller();
        ctrl.handle(Event::Char('8'));
        ctrl.clear_matrix();

        assert_eq!(ctrl.frame().lit_indices().count(), 0);
        let words = &ctrl.transmitter().channel().words;
        assert_eq!(words.len(), 150);
        assert!(words[75..].iter().all(|&w| w == 0));
    }
}
