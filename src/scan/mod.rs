//! The word boundary scanner shared by every case style.
//!
//! Input is read left to right exactly once. Each character is classified as
//! an upper-case letter, a lower-case letter, a digit, a kept mark or a
//! separator, and the class of the previous character decides whether a word
//! boundary falls in front of it. A boundary is rendered by the [`Style`],
//! either as a separator glyph or purely in the case of the next letter.

use crate::{
    ascii::{self, Casing},
    Options,
};


/// How words are rendered by a particular case convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Style {
    /// Written between words. `None` if boundaries are encoded in the case of
    /// the following letter.
    pub separator: Option<char>,
    /// Case of the first letter of the output.
    pub initial: Casing,
    /// Case of the first letter of every later word.
    pub word_start: Casing,
    /// Case of all other letters.
    pub rest: Casing,
}

/// The class of the last character consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Upper,
    /// At least two upper-case letters in a row.
    UpperRun,
    /// One or more dropped separators, not at the start of the input.
    Separator,
    Kept,
    Other,
}

pub(crate) fn convert(input: &str, opts: &Options<'_>, style: Style) -> String {
    let capacity = match style.separator {
        Some(_) => input.len() + input.len() / 2,
        None => input.len(),
    };

    let mut scanner = Scanner {
        style,
        opts,
        out: String::with_capacity(capacity),
        prev: Prev::Start,
    };
    for ch in input.chars() {
        scanner.push(ch);
    }
    scanner.out
}

struct Scanner<'a> {
    style: Style,
    opts: &'a Options<'a>,
    out: String,
    prev: Prev,
}

impl<'a> Scanner<'a> {
    fn push(&mut self, ch: char) {
        match Casing::of(ch) {
            Some(Casing::Upper) => self.upper(ch),
            Some(Casing::Lower) => self.lower(ch),
            None if ascii::is_digit(ch) => self.digit(ch),
            None if self.opts.is_kept(ch) => self.kept(ch),
            None => self.separator(),
        }
    }

    fn upper(&mut self, ch: char) {
        self.prev = match self.prev {
            Prev::Start => {
                self.out.push(self.style.initial.apply(ch));
                Prev::Upper
            }
            Prev::Upper | Prev::UpperRun => {
                self.out.push(self.style.rest.apply(ch));
                Prev::UpperRun
            }
            Prev::Kept if !self.opts.separate_after_non_alphabets => {
                self.out.push(self.style.rest.apply(ch));
                Prev::Upper
            }
            Prev::Separator | Prev::Kept | Prev::Other => {
                self.start_word(ch);
                Prev::Upper
            }
        };
    }

    fn lower(&mut self, ch: char) {
        match self.prev {
            Prev::Start => self.out.push(self.style.initial.apply(ch)),
            Prev::UpperRun => {
                // The last capital of the run actually starts this word, e.g.
                // the `R` in `HTTPRequest`.
                if let Some(last) = self.out.pop() {
                    self.start_word(last);
                }
                self.out.push(self.style.rest.apply(ch));
            }
            Prev::Separator => self.start_word(ch),
            Prev::Kept if self.opts.separate_after_non_alphabets => self.start_word(ch),
            Prev::Upper | Prev::Kept | Prev::Other => self.out.push(self.style.rest.apply(ch)),
        }
        self.prev = Prev::Other;
    }

    fn digit(&mut self, ch: char) {
        if self.prev == Prev::Separator {
            self.boundary();
        }
        self.out.push(ch);
        self.prev = Prev::Other;
    }

    fn kept(&mut self, ch: char) {
        let boundary = if self.opts.separate_before_non_alphabets {
            !matches!(self.prev, Prev::Start | Prev::Kept)
        } else {
            self.prev == Prev::Separator
        };
        if boundary {
            self.boundary();
        }
        self.out.push(ch);
        self.prev = Prev::Kept;
    }

    fn separator(&mut self) {
        if self.prev != Prev::Start {
            self.prev = Prev::Separator;
        }
    }

    fn start_word(&mut self, ch: char) {
        self.boundary();
        self.out.push(self.style.word_start.apply(ch));
    }

    fn boundary(&mut self) {
        if let Some(separator) = self.style.separator {
            self.out.push(separator);
        }
    }
}
