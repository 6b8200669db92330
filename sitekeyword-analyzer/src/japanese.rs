//! Script-run segmentation for Japanese text.
//!
//! Text is split wherever the script changes. Kanji runs (including the iteration
//! mark `々`), Katakana runs (including `ー`) and runs of other letters or digits are
//! candidates when at least two characters long. Hiragana runs are mostly particles
//! and inflections, so they act as separators together with punctuation and spaces.
//! Candidates are used verbatim: no stop words, no case folding, no normalization.

use crate::keywords::{Candidate, Extraction};
use crate::language::{CJK_UNIFIED, HIRAGANA, KATAKANA};

const MIN_RUN_CHARS: usize = 2;
const ITERATION_MARK: char = '\u{3005}';
const KATAKANA_MIDDLE_DOT: char = '\u{30FB}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Kanji,
    Katakana,
    Hiragana,
    Word,
    Separator,
}

impl Script {
    fn of(c: char) -> Self {
        let cp = c as u32;
        if CJK_UNIFIED.contains(&cp) || c == ITERATION_MARK {
            Script::Kanji
        } else if c == KATAKANA_MIDDLE_DOT {
            Script::Separator
        } else if KATAKANA.contains(&cp) {
            Script::Katakana
        } else if HIRAGANA.contains(&cp) {
            Script::Hiragana
        } else if c.is_alphanumeric() {
            Script::Word
        } else {
            Script::Separator
        }
    }

    fn is_candidate(self) -> bool {
        matches!(self, Script::Kanji | Script::Katakana | Script::Word)
    }
}

pub fn extract(text: &str) -> Extraction {
    let mut candidates = Vec::new();
    let mut run = String::new();
    let mut run_script = Script::Separator;

    for c in text.chars() {
        let script = Script::of(c);
        if script != run_script {
            flush(&mut run, run_script, &mut candidates);
            run_script = script;
        }
        run.push(c);
    }
    flush(&mut run, run_script, &mut candidates);

    Extraction::from_candidates(candidates)
}

fn flush(run: &mut String, script: Script, out: &mut Vec<Candidate>) {
    if script.is_candidate() && run.chars().count() >= MIN_RUN_CHARS {
        out.push(Candidate::new(run.as_str(), run.as_str()));
    }
    run.clear();
}
