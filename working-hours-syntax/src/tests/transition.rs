use std::ops::ControlFlow;

use chrono::Weekday;

use crate::parser::{ParserState, State, Transition};
use crate::range::{DaysRange, HoursRange, RangePair};
use crate::tokenizer::{Token, TokenKind};

fn hour(value: &str) -> Token {
    Token::new(value, TokenKind::Hour)
}

fn word(value: &str) -> Token {
    Token::new(value, TokenKind::Word)
}

fn mark() -> Token {
    Token::new("-", TokenKind::RangeMark)
}

fn monday() -> Token {
    Token::new("пн", TokenKind::Weekday)
}

fn inside() -> ParserState {
    ParserState { state: State::InsideDatetime, ..Default::default() }
}

fn inside_with_block() -> ParserState {
    ParserState {
        state: State::InsideDatetime,
        days: Some(DaysRange::with_end(Weekday::Mon, Weekday::Fri)),
        hours: Some(HoursRange::with_end("9".to_string(), "18".to_string())),
        ..Default::default()
    }
}

fn past_first_department() -> ParserState {
    ParserState {
        showroom: true,
        ranges: vec![RangePair::Days(DaysRange::new(Weekday::Sat))],
        ..Default::default()
    }
}

#[test]
fn enter_on_daytime_tokens() {
    let parser = ParserState::default();
    assert_eq!(parser.transition(&hour("9"), None), Transition::Enter);
    assert_eq!(parser.transition(&monday(), None), Transition::Enter);

    assert_eq!(
        parser.transition(&Token::new("будни", TokenKind::WeekdayRange), None),
        Transition::Enter,
    );

    assert_eq!(parser.transition(&word("режим"), None), Transition::Stay);
    assert_eq!(parser.transition(&mark(), Some(&hour("9"))), Transition::Stay);
}

#[test]
fn words_close_blocks() {
    let parser = inside();
    assert_eq!(parser.transition(&word("сервис"), None), Transition::Close);
    assert_eq!(parser.transition(&word("с"), None), Transition::Stay);
    assert_eq!(parser.transition(&word("c"), None), Transition::Stay);

    let parser = ParserState { showroom: true, ..inside() };
    assert_eq!(parser.transition(&word("сервис"), None), Transition::CloseAndStop);
}

#[test]
fn range_marks_need_a_daytime_lookahead() {
    let parser = inside();
    assert_eq!(parser.transition(&mark(), Some(&hour("18"))), Transition::Stay);
    assert_eq!(parser.transition(&mark(), Some(&monday())), Transition::Stay);
    assert_eq!(parser.transition(&mark(), Some(&word("выходной"))), Transition::Close);
    assert_eq!(parser.transition(&mark(), None), Transition::Close);
}

#[test]
fn complete_block_is_closed_by_daytime_token() {
    let parser = inside_with_block();
    assert_eq!(parser.transition(&hour("18"), None), Transition::Close);
    assert_eq!(parser.transition(&monday(), None), Transition::Close);

    // Only one of the ranges is known
    let parser = ParserState { days: None, ..inside_with_block() };
    assert_eq!(parser.transition(&hour("18"), None), Transition::Stay);
}

#[test]
fn showroom_stops_on_unrelated_text() {
    let parser = past_first_department();
    assert_eq!(parser.transition(&word("сервис"), Some(&word("центр"))), Transition::Stop);
    assert_eq!(parser.transition(&word("сервис"), None), Transition::Stop);
    assert_eq!(parser.transition(&word("сервис"), Some(&monday())), Transition::Stay);

    // Nothing was found yet
    let parser = ParserState { ranges: Vec::new(), ..past_first_department() };
    assert_eq!(parser.transition(&word("сервис"), Some(&word("центр"))), Transition::Stay);
}

#[test]
fn step_through_a_block() {
    let mut parser = ParserState::default();
    let tokens = [monday(), mark(), Token::new("пт", TokenKind::Weekday), hour("9"), mark(), hour("18")];

    for (i, token) in tokens.iter().enumerate() {
        assert_eq!(parser.step(token, tokens.get(i + 1)), ControlFlow::Continue(()));
    }

    assert_eq!(parser.state, State::OutsideDatetime);
    assert!(parser.days.is_none());
    assert!(parser.hours.is_none());

    assert_eq!(
        parser.into_ranges(),
        [RangePair::DaysAndHours(
            DaysRange::with_end(Weekday::Mon, Weekday::Fri),
            HoursRange::with_end("9".to_string(), "18".to_string()),
        )]
    );
}

#[test]
fn step_flags_showroom() {
    let mut parser = ParserState::default();
    assert_eq!(parser.step(&word("автосалон"), Some(&word("и"))), ControlFlow::Continue(()));
    assert!(parser.showroom);

    // Only exact words count
    let mut parser = ParserState::default();
    assert_eq!(parser.step(&word("автосалона"), None), ControlFlow::Continue(()));
    assert!(!parser.showroom);
}

#[test]
fn step_stops_after_showroom_block() {
    let mut parser = ParserState { showroom: true, ..inside_with_block() };
    assert_eq!(parser.step(&word("сервис"), None), ControlFlow::Break(()));
    assert_eq!(parser.into_ranges().len(), 1);
}
