use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::session::question::Question;

/// Target size of a synthesized choice set: the correct word plus three distractors.
pub const OPTION_COUNT: usize = 4;
pub const DISTRACTOR_COUNT: usize = OPTION_COUNT - 1;

/// Build the frozen option order for `questions[index]`.
///
/// Native options are deduplicated and shuffled. Empty option lists are
/// synthesized from the words of the other loaded questions; when fewer than
/// [`DISTRACTOR_COUNT`] distinct words are available the set is simply smaller.
pub fn build_display_options<R: Rng + ?Sized>(
    questions: &[Question],
    index: usize,
    rng: &mut R,
) -> Vec<String> {
    let Some(question) = questions.get(index) else {
        return Vec::new();
    };

    let mut options = if question.needs_synthesis() {
        synthesize(questions, index, rng)
    } else {
        native_options(question)
    };

    options.shuffle(rng);
    options
}

fn native_options(question: &Question) -> Vec<String> {
    let mut options = dedup_preserving_order(question.options.iter().cloned());
    if !options.iter().any(|o| *o == question.word) {
        tracing::warn!(
            word = %question.word,
            "native options do not contain the correct word; adding it"
        );
        options.push(question.word.clone());
    }
    options
}

fn synthesize<R: Rng + ?Sized>(questions: &[Question], index: usize, rng: &mut R) -> Vec<String> {
    let correct = &questions[index].word;
    let pool = distractor_pool(questions, index);

    if pool.len() < DISTRACTOR_COUNT {
        tracing::warn!(
            word = %correct,
            available = pool.len(),
            "not enough distractors, using a reduced option set"
        );
    }

    let mut options: Vec<String> = pool
        .choose_multiple(rng, DISTRACTOR_COUNT)
        .map(|w| w.to_string())
        .collect();
    options.push(correct.clone());
    options
}

/// Distinct words of every other question, never including the current word.
pub fn distractor_pool(questions: &[Question], index: usize) -> Vec<&str> {
    let Some(current) = questions.get(index) else {
        return Vec::new();
    };
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(current.word.as_str());

    questions
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, q)| q.word.as_str())
        .filter(|w| !w.is_empty() && seen.insert(*w))
        .collect()
}

fn dedup_preserving_order(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
