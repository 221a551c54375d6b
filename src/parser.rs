/// A `word=meaning` pair read from the input text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPair {
    pub word: String,
    pub meaning: String,
}

#[derive(Debug, Default)]
pub struct ParsedInput {
    pub pairs: Vec<WordPair>,
    // non-empty lines that produced no pair
    pub skipped: usize,
}

/// Parses one line of the input file.
///
/// `=` wins over `:` whenever the line contains it, even if a `:` comes
/// first. Only the first separator splits; the rest stays in the meaning.
pub fn parse_line(line: &str) -> Option<WordPair> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let separator = if line.contains('=') {
        '='
    } else if line.contains(':') {
        ':'
    } else {
        return None;
    };

    let parts: Vec<&str> = line.splitn(2, separator).collect();
    if parts.len() != 2 {
        return None;
    }

    Some(WordPair {
        word: parts[0].trim().to_string(),
        meaning: parts[1].trim().to_string(),
    })
}

pub fn parse_input(content: &str) -> ParsedInput {
    let mut parsed = ParsedInput::default();
    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(pair) => parsed.pairs.push(pair),
            None => {
                tracing::debug!(line = number + 1, "skipping line without separator");
                parsed.skipped += 1;
            }
        }
    }
    parsed
}
