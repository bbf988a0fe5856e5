use folio_core::TypewriterConfig;
use std::time::Duration;

/// Text to show now and how long to wait before the next tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay: Duration,
}

/// Types each word out, holds it, erases it, moves on to the next, forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<Vec<char>>,
    word_index: usize,
    /// Visible characters of the current word
    char_index: usize,
    deleting: bool,
    type_delay: Duration,
    delete_delay: Duration,
    hold: Duration,
    next_word: Duration,
}

impl Typewriter {
    pub fn new(config: &TypewriterConfig) -> Self {
        Self {
            words: config.words.iter().map(|w| w.chars().collect()).collect(),
            word_index: 0,
            char_index: 0,
            deleting: false,
            type_delay: Duration::from_millis(config.type_delay_ms),
            delete_delay: Duration::from_millis(config.delete_delay_ms),
            hold: Duration::from_millis(config.hold_ms),
            next_word: Duration::from_millis(config.next_word_ms),
        }
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn tick(&mut self) -> TypeStep {
        let Some(word) = self.words.get(self.word_index) else {
            return TypeStep {
                text: String::new(),
                delay: self.type_delay,
            };
        };
        let len = word.len();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }
        let text: String = word[..self.char_index].iter().collect();

        let mut delay = if self.deleting {
            self.delete_delay
        } else {
            self.type_delay
        };

        if !self.deleting && self.char_index == len {
            delay = self.hold;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.word_index = (self.word_index + 1) % self.words.len();
            delay = self.next_word;
        }

        TypeStep { text, delay }
    }
}

/// Drives a [`Typewriter`] from frame deltas
#[derive(Debug, Clone)]
pub struct TypewriterClock {
    writer: Typewriter,
    /// Time banked towards the next tick
    elapsed: Duration,
    /// Delay requested by the last tick; zero before the first
    wait: Duration,
    text: String,
}

impl TypewriterClock {
    pub fn new(writer: Typewriter) -> Self {
        Self {
            writer,
            elapsed: Duration::ZERO,
            wait: Duration::ZERO,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Feed elapsed time; returns true when the text changed
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        let mut ticked = false;
        while self.elapsed >= self.wait {
            self.elapsed -= self.wait;
            let step = self.writer.tick();
            ticked |= step.text != self.text;
            self.text = step.text;
            self.wait = step.delay;
            if self.wait.is_zero() {
                break;
            }
        }
        ticked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writer(words: &[&str]) -> Typewriter {
        Typewriter::new(&TypewriterConfig {
            words: words.iter().map(|w| w.to_string()).collect(),
            ..TypewriterConfig::default()
        })
    }

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_full_cycle_of_one_word() {
        let mut tw = writer(&["abc", "de"]);
        let steps: Vec<_> = (0..7).map(|_| tw.tick()).collect();
        let texts: Vec<&str> = steps.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["a", "ab", "abc", "ab", "a", "", "d"]);

        let delays: Vec<Duration> = steps.iter().map(|s| s.delay).collect();
        assert_eq!(delays, [ms(100), ms(100), ms(2000), ms(50), ms(50), ms(500), ms(100)]);
        assert_eq!(tw.word_index(), 1);
    }

    #[test]
    fn test_wraps_to_first_word() {
        let mut tw = writer(&["x", "y"]);
        // x: type, erase; y: type, erase
        for _ in 0..4 {
            tw.tick();
        }
        assert_eq!(tw.word_index(), 0);
        assert_eq!(tw.tick().text, "x");
    }

    #[test]
    fn test_unicode_by_char() {
        let mut tw = writer(&["é✓"]);
        assert_eq!(tw.tick().text, "é");
        assert_eq!(tw.tick().text, "é✓");
    }

    #[test]
    fn test_empty_word_is_skipped() {
        let mut tw = writer(&["", "ok"]);
        let hold = tw.tick();
        assert_eq!(hold.text, "");
        assert_eq!(hold.delay, ms(2000));
        let next = tw.tick();
        assert_eq!(next.delay, ms(500));
        assert_eq!(tw.tick().text, "o");
    }

    #[test]
    fn test_no_words() {
        let mut tw = writer(&[]);
        assert_eq!(tw.tick(), TypeStep { text: String::new(), delay: ms(100) });
    }

    #[test]
    fn test_clock_first_tick_is_immediate() {
        let mut clock = TypewriterClock::new(writer(&["Data Science"]));
        assert!(clock.advance(Duration::ZERO));
        assert_eq!(clock.text(), "D");
        assert!(!clock.advance(ms(99)));
        assert!(clock.advance(ms(1)));
        assert_eq!(clock.text(), "Da");
    }

    #[test]
    fn test_clock_catches_up_after_stall() {
        let mut clock = TypewriterClock::new(writer(&["abcdef"]));
        clock.advance(Duration::ZERO);
        clock.advance(ms(350));
        assert_eq!(clock.text(), "abcd");
    }
}
