//! 首页状态（打字机标语 + 趣闻）

/// 轮播短语，与表情一一对应
const PHRASES: [&str; 6] = [
    "a software engineer",
    "a designer",
    "a product manager",
    "a photographer",
    "a proud Mexican",
    "an entrepreneur",
];

const EMOJIS: [&str; 6] = ["🖥️", "🎨", "💼", "📷", "🇲🇽", "📈"];

/// 整句打完后停留的 tick 数（每 tick 约 100ms）
const PAUSE_TICKS: u8 = 10;

const FACTS: [&str; 5] = [
    "🏙️: I am from Mexico City (capital of Mexico)",
    "🏎️: I am an avid Formula 1 fan",
    "🏫: I graduated from highschool a year early",
    "🎓: I was at Stanford for a year with both of my older siblings",
    "🚣‍♂️: I was a competitive rower in high school",
];

/// 首页状态
#[derive(Debug, Default)]
pub struct HomeState {
    /// 当前短语索引
    phrase: usize,
    /// 已打出的字符数
    chars: usize,
    /// 整句打完后的停顿计数
    pause: u8,
    /// 当前展示的趣闻索引
    fact: Option<usize>,
}

impl HomeState {
    /// 创建首页状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 推进打字机效果一格
    ///
    /// 每句逐字符打出，打完停 [`PAUSE_TICKS`] 个 tick 再换下一句，
    /// 最后一句之后绕回第一句。
    pub fn tick(&mut self) {
        let len = PHRASES[self.phrase].chars().count();
        if self.chars < len {
            self.chars += 1;
        } else if self.pause < PAUSE_TICKS {
            self.pause += 1;
        } else {
            self.pause = 0;
            self.chars = 0;
            self.phrase = (self.phrase + 1) % PHRASES.len();
        }
    }

    /// 当前标语行，例如 `🖥️ I am a software eng`
    pub fn tagline(&self) -> String {
        let typed: String = PHRASES[self.phrase].chars().take(self.chars).collect();
        format!("{} I am {}", EMOJIS[self.phrase], typed)
    }

    /// 轮换到下一条趣闻
    ///
    /// 终端下用轮换代替随机，行为可预期。
    pub fn next_fact(&mut self) {
        self.fact = Some(self.fact.map_or(0, |i| (i + 1) % FACTS.len()));
    }

    /// 当前趣闻文本
    pub fn fact(&self) -> Option<&'static str> {
        self.fact.map(|i| FACTS[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tagline_types_one_char_per_tick() {
        let mut home = HomeState::new();
        assert_eq!(home.tagline(), "🖥️ I am ");

        home.tick();
        assert_eq!(home.tagline(), "🖥️ I am a");
        home.tick();
        assert_eq!(home.tagline(), "🖥️ I am a ");
    }

    #[test]
    fn full_phrase_pauses_then_advances() {
        let mut home = HomeState::new();
        let first_len = "a software engineer".chars().count();
        for _ in 0..first_len {
            home.tick();
        }
        assert_eq!(home.tagline(), "🖥️ I am a software engineer");

        // 停顿期间不换句
        for _ in 0..PAUSE_TICKS {
            home.tick();
            assert_eq!(home.tagline(), "🖥️ I am a software engineer");
        }

        // 停顿结束，从头打下一句
        home.tick();
        assert_eq!(home.tagline(), "🎨 I am ");
    }

    #[test]
    fn phrases_wrap_around() {
        let mut home = HomeState::new();
        let total: usize = PHRASES
            .iter()
            .map(|p| p.chars().count() + PAUSE_TICKS as usize + 1)
            .sum();
        for _ in 0..total {
            home.tick();
        }
        assert!(home.tagline().starts_with("🖥️"));
    }

    #[test]
    fn facts_start_hidden_and_cycle() {
        let mut home = HomeState::new();
        assert!(home.fact().is_none());

        home.next_fact();
        let first = home.fact().unwrap();

        for _ in 0..FACTS.len() {
            home.next_fact();
        }
        assert_eq!(home.fact().unwrap(), first);
    }
}
