use regex::RegexBuilder;

/// A run of example text, flagged when it is an occurrence of the answer word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Split `example` around case-insensitive whole-word matches of `word`.
pub fn split_highlight<'a>(example: &'a str, word: &str) -> Vec<Segment<'a>> {
    if example.is_empty() {
        return Vec::new();
    }
    let plain = || {
        vec![Segment {
            text: example,
            highlighted: false,
        }]
    };
    if word.trim().is_empty() {
        return plain();
    }

    let word = word.trim();
    let boundary = |c: Option<char>| match c {
        Some(c) if c.is_alphanumeric() || c == '_' => r"\b",
        _ => "",
    };
    let pattern = format!(
        "{}{}{}",
        boundary(word.chars().next()),
        regex::escape(word),
        boundary(word.chars().next_back()),
    );
    let Ok(re) = RegexBuilder::new(&pattern).case_insensitive(true).build() else {
        return plain();
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(example) {
        if m.start() > last {
            segments.push(Segment {
                text: &example[last..m.start()],
                highlighted: false,
            });
        }
        segments.push(Segment {
            text: m.as_str(),
            highlighted: true,
        });
        last = m.end();
    }
    if last < example.len() {
        segments.push(Segment {
            text: &example[last..],
            highlighted: false,
        });
    }
    segments
}
