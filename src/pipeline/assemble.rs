//! Turns raw segmenter output into skill-shaped tokens.
//!
//! Segmenters disagree on punctuation: UAX #29 keeps `node.js` together but
//! splits `scikit-learn`, a BERT pre-tokenizer splits both. Every backend's
//! segments are therefore broken into atoms (alphanumeric runs and single
//! punctuation marks) and glued back with one rule:
//!
//! - a joiner (`.`, `-`, `_`) sitting directly between two words joins them;
//! - a run of `+` or `#` directly after a word is appended to it;
//! - any other punctuation is dropped.
//!
//! A word glued by `.` or `-` is also emitted as its parts, right after the
//! compound, so `python-based` yields `python-based`, `python` and `based`.

use super::Token;

const JOINERS: &[char] = &['.', '-', '_'];
const SPLITTING_JOINERS: &[char] = &['.', '-'];
const SUFFIXES: &[char] = &['+', '#'];

#[derive(Debug, Clone, Copy, PartialEq)]
enum AtomKind {
    Word,
    Punct(char),
}

#[derive(Debug, Clone, Copy)]
struct Atom {
    start: usize,
    end: usize,
    kind: AtomKind,
}

/// A glued run of words and the byte spans of its parts
#[derive(Debug)]
struct Compound {
    start: usize,
    end: usize,
    parts: Vec<(usize, usize)>,
    split: bool,
}

impl Compound {
    fn new(atom: &Atom) -> Self {
        Self {
            start: atom.start,
            end: atom.end,
            parts: vec![(atom.start, atom.end)],
            split: false,
        }
    }

    fn spans(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let parts: &[(usize, usize)] = if self.split && self.parts.len() > 1 { &self.parts[..] } else { &[] };
        std::iter::once((self.start, self.end)).chain(parts.iter().copied())
    }
}

/// Split a segment `text[start..end]` into atoms
fn atomize(text: &str, start: usize, end: usize, atoms: &mut Vec<Atom>) {
    let mut word_start: Option<usize> = None;

    for (offset, c) in text[start..end].char_indices() {
        let pos = start + offset;
        if c.is_alphanumeric() {
            word_start.get_or_insert(pos);
            continue;
        }

        if let Some(ws) = word_start.take() {
            atoms.push(Atom { start: ws, end: pos, kind: AtomKind::Word });
        }
        if !c.is_whitespace() {
            atoms.push(Atom {
                start: pos,
                end: pos + c.len_utf8(),
                kind: AtomKind::Punct(c),
            });
        }
    }

    if let Some(ws) = word_start {
        atoms.push(Atom { start: ws, end, kind: AtomKind::Word });
    }
}

/// Build tokens from `(start, end)` byte spans produced by a segmenter over `text`
pub(crate) fn assemble(text: &str, segments: &[(usize, usize)]) -> Vec<Token> {
    let mut atoms = Vec::new();
    for &(start, end) in segments {
        if start < end && end <= text.len() {
            atomize(text, start, end, &mut atoms);
        }
    }

    let mut compounds: Vec<Compound> = Vec::new();
    let mut pending_joiner: Option<Atom> = None;

    for atom in atoms {
        let last_end = compounds.last().map(|c| c.end);

        match atom.kind {
            AtomKind::Word => {
                let joiner = pending_joiner.take().filter(|joiner| {
                    last_end == Some(joiner.start) && joiner.end == atom.start
                });
                if let Some(AtomKind::Punct(c)) = joiner.map(|j| j.kind) {
                    if let Some(last) = compounds.last_mut() {
                        last.end = atom.end;
                        last.parts.push((atom.start, atom.end));
                        last.split |= SPLITTING_JOINERS.contains(&c);
                        continue;
                    }
                }
                compounds.push(Compound::new(&atom));
            }
            AtomKind::Punct(c) if JOINERS.contains(&c) => {
                pending_joiner = match (pending_joiner, last_end) {
                    (None, Some(end)) if end == atom.start => Some(atom),
                    _ => None,
                };
            }
            AtomKind::Punct(c) if SUFFIXES.contains(&c) => {
                if pending_joiner.is_none() && last_end == Some(atom.start) {
                    if let Some(last) = compounds.last_mut() {
                        last.end = atom.end;
                        if let Some(part) = last.parts.last_mut() {
                            part.1 = atom.end;
                        }
                    }
                }
                pending_joiner = None;
            }
            AtomKind::Punct(_) => pending_joiner = None,
        }
    }

    compounds
        .iter()
        .flat_map(Compound::spans)
        .map(|(start, end)| Token {
            text: text[start..end].to_string(),
            start,
            end,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        // One segment per whitespace-separated run
        let mut segments = Vec::new();
        let mut start = None;
        for (i, c) in text.char_indices() {
            if c.is_whitespace() {
                if let Some(s) = start.take() {
                    segments.push((s, i));
                }
            } else if start.is_none() {
                start = Some(i);
            }
        }
        if let Some(s) = start {
            segments.push((s, text.len()));
        }
        assemble(text, &segments).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_joiners_glue_words() {
        assert_eq!(
            words("node.js scikit-learn snake_case"),
            vec!["node.js", "node", "js", "scikit-learn", "scikit", "learn", "snake_case"]
        );
    }

    #[test]
    fn test_hyphenated_words_expose_parts() {
        assert_eq!(words("aws-certified"), vec!["aws-certified", "aws", "certified"]);
        assert_eq!(words("c++-based"), vec!["c++-based", "c++", "based"]);
    }

    #[test]
    fn test_apostrophe_splits_possessive() {
        assert_eq!(words("python's ecosystem"), vec!["python", "s", "ecosystem"]);
    }

    #[test]
    fn test_suffixes_attach_to_word() {
        assert_eq!(words("c++ and c#, f#."), vec!["c++", "and", "c#", "f#"]);
    }

    #[test]
    fn test_trailing_and_leading_punctuation_dropped() {
        assert_eq!(words("(python), sql. -docker-"), vec!["python", "sql", "docker"]);
    }

    #[test]
    fn test_joiner_needs_both_neighbours_adjacent() {
        assert_eq!(words("sql - docker"), vec!["sql", "docker"]);
        assert_eq!(words("a..b"), vec!["a", "b"]);
    }

    #[test]
    fn test_offsets_point_into_text() {
        let text = "skills: node.js";
        let tokens = assemble(text, &[(0, text.len())]);
        assert_eq!(tokens.len(), 4);
        assert_eq!(&text[tokens[1].start..tokens[1].end], "node.js");
        assert!(tokens.iter().all(|t| text[t.start..t.end] == t.text));
    }
}
