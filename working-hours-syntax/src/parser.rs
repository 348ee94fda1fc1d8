use std::ops::ControlFlow;

use crate::error::Result;
use crate::lexicon;
use crate::range::{DaysRange, HoursRange, Range, RangePair};
use crate::tokenizer::{normalize, Token, TokenKind, Tokenizer};

/// Words that may appear inside of a block of hours, as in "с 8 до 21".
/// Both the cyrillic and the latin letter are accepted.
const FILLER_WORDS: [&str; 2] = ["с", "c"];

/// Words announcing the primary department: if one is found, parsing stops
/// as soon as the text moves on to another department.
const SHOWROOM_WORDS: [&str; 2] = ["продаж", "автосалон"];

/// Extract blocks of working hours from raw text.
///
/// Parsing is lenient: text that doesn't look like working hours is skipped
/// and partial blocks are kept as is. An error is only returned if the
/// tokenizer itself is broken.
///
/// ```
/// use chrono::Weekday;
/// use working_hours_syntax::{parse, DaysRange};
///
/// let pairs = parse("Пн-Пт: 9.00-19.00").unwrap();
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(pairs[0].days(), Some(&DaysRange::with_end(Weekday::Mon, Weekday::Fri)));
/// assert_eq!(pairs[0].hours().unwrap().start, "9.00");
/// assert_eq!(pairs[0].hours().unwrap().end.as_deref(), Some("19.00"));
/// ```
pub fn parse(text: &str) -> Result<Vec<RangePair>> {
    let text = normalize(text);
    let mut tokens = Tokenizer::new(&text).peekable();
    let mut parser = ParserState::default();

    while let Some(token) = tokens.next() {
        let token = token?;

        let next = match tokens.peek() {
            Some(Ok(next)) => Some(next),
            Some(Err(err)) => return Err(err.clone()),
            None => None,
        };

        if parser.step(&token, next).is_break() {
            break;
        }
    }

    Ok(parser.into_ranges())
}

// ---
// --- State machine
// ---

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum State {
    /// Reading text that is not related to working hours
    #[default]
    OutsideDatetime,
    /// Reading a block of days and hours
    InsideDatetime,
}

/// Transition triggered by a token, before it is handled by current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Transition {
    /// Start a new block
    Enter,
    /// Save current block and leave it
    Close,
    /// Save current block and stop parsing
    CloseAndStop,
    /// Stop parsing, nothing is pending
    Stop,
    /// Keep current state
    Stay,
}

/// Everything that is accumulated while reading a single text.
#[derive(Clone, Debug, Default)]
pub(crate) struct ParserState {
    pub(crate) state: State,
    pub(crate) days: Option<DaysRange>,
    pub(crate) hours: Option<HoursRange>,
    pub(crate) showroom: bool,
    pub(crate) ranges: Vec<RangePair>,
}

impl ParserState {
    /// Evaluate which transition must be applied for current token, given the
    /// token that follows it.
    pub(crate) fn transition(&self, token: &Token, next: Option<&Token>) -> Transition {
        let kind = token.kind();
        let next_is_daytime = next.is_some_and(|next| next.kind().is_daytime());

        let close = {
            if self.showroom {
                Transition::CloseAndStop
            } else {
                Transition::Close
            }
        };

        match self.state {
            State::OutsideDatetime if kind.is_daytime() => Transition::Enter,
            State::InsideDatetime
                if kind == TokenKind::Word && !FILLER_WORDS.contains(&token.value()) =>
            {
                close
            }
            State::InsideDatetime if kind == TokenKind::RangeMark && !next_is_daytime => close,
            State::OutsideDatetime
                if self.showroom
                    && !kind.is_daytime()
                    && !next_is_daytime
                    && !self.ranges.is_empty() =>
            {
                Transition::Stop
            }
            // A new block starts without any separator
            State::InsideDatetime
                if self.days.is_some() && self.hours.is_some() && kind.is_daytime() =>
            {
                Transition::Close
            }
            _ => Transition::Stay,
        }
    }

    /// Consume a token and tell if parsing should go on.
    pub(crate) fn step(&mut self, token: &Token, next: Option<&Token>) -> ControlFlow<()> {
        match self.transition(token, next) {
            Transition::Enter => self.state = State::InsideDatetime,
            Transition::Close => self.close(),
            Transition::CloseAndStop => {
                self.close();
                self.log_early_stop(token);
                return ControlFlow::Break(());
            }
            Transition::Stop => {
                self.log_early_stop(token);
                return ControlFlow::Break(());
            }
            Transition::Stay => {}
        }

        match self.state {
            State::InsideDatetime => self.handle_datetime(token, next),
            State::OutsideDatetime => self.handle_outside_datetime(token),
        }

        if next.is_none() && self.state == State::InsideDatetime {
            self.close();
        }

        ControlFlow::Continue(())
    }

    pub(crate) fn into_ranges(self) -> Vec<RangePair> {
        self.ranges
    }

    /// Save pending ranges and go back outside of a block.
    fn close(&mut self) {
        self.state = State::OutsideDatetime;

        if let Some(pair) = RangePair::from_parts(self.days.take(), self.hours.take()) {
            #[cfg(feature = "log")]
            log::trace!("found working hours {pair}");

            self.ranges.push(pair);
        }
    }

    fn handle_datetime(&mut self, token: &Token, next: Option<&Token>) {
        match token.kind() {
            TokenKind::Hour if self.hours.is_none() => {
                self.hours = Some(Range::new(token.value().to_string()));
            }
            TokenKind::Weekday if self.days.is_none() => {
                self.days =
                    lexicon::weekday_from_name(token.value()).map(|wday| Range::with_end(wday, wday));
            }
            TokenKind::WeekdayRange if self.days.is_none() => {
                self.days = lexicon::weekday_range_from_phrase(token.value())
                    .map(|(start, end)| Range::with_end(start, end));
            }
            TokenKind::RangeMark => match (next.map(Token::kind), &mut self.hours, &mut self.days) {
                (Some(TokenKind::Hour), Some(hours), _) => {
                    hours.end = next.map(|next| next.value().to_string());
                }
                (Some(TokenKind::Weekday), _, Some(days)) => {
                    days.end = next.and_then(|next| lexicon::weekday_from_name(next.value()));
                }
                _ => {}
            },
            _ => {}
        }
    }

    fn handle_outside_datetime(&mut self, token: &Token) {
        if SHOWROOM_WORDS.contains(&token.value()) {
            self.showroom = true;
        }
    }

    #[allow(unused_variables)]
    fn log_early_stop(&self, token: &Token) {
        #[cfg(feature = "log")]
        log::debug!(
            "stop reading working hours at `{}` after {} block(s) of the main department",
            token.value(),
            self.ranges.len(),
        );
    }
}
