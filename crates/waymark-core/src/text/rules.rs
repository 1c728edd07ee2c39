//! Rewrite rule tables.
//!
//! Each table is an ordered list of [`Rule`] records. Order is significant:
//! later rules run against the output of earlier ones, and the first-match
//! strategy stops at the first matching entry. Game terms (zone names, item
//! names, "Waypoint") are deliberately left in English.

use once_cell::sync::Lazy;
use regex::Regex;

/// How many occurrences a rule rewrites when its pattern matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    /// Rewrite only the first occurrence
    First,
    /// Rewrite every occurrence
    All,
}

/// One rewrite rule: a compiled pattern, a replacement, and a multiplicity.
#[derive(Debug)]
pub struct Rule {
    pattern: Regex,
    replacement: &'static str,
    multiplicity: Multiplicity,
}

impl Rule {
    /// Case-insensitive rule anchored at the start of the string, rewriting
    /// the first occurrence.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression.
    pub fn prefix(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(&format!("(?i)^{pattern}")).unwrap(),
            replacement,
            multiplicity: Multiplicity::First,
        }
    }

    /// Case-insensitive rule matching anywhere, rewriting every occurrence.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression.
    pub fn phrase(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(&format!("(?i){pattern}")).unwrap(),
            replacement,
            multiplicity: Multiplicity::All,
        }
    }

    /// Case-sensitive rule matching anywhere, rewriting every occurrence.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` is not a valid regular expression.
    pub fn phrase_exact(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
            multiplicity: Multiplicity::All,
        }
    }

    /// Whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Apply the rule to `text`. Returns the input unchanged when the
    /// pattern does not match.
    pub fn apply(&self, text: &str) -> String {
        match self.multiplicity {
            Multiplicity::First => self.pattern.replace(text, self.replacement).into_owned(),
            Multiplicity::All => self.pattern.replace_all(text, self.replacement).into_owned(),
        }
    }
}

/// Leading action verbs for step descriptions. More specific entries come
/// before their shorter variants.
pub static DESCRIPTION_PREFIX_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Portals and waypoints
        Rule::prefix(r"Portal to\s+", "Портал в "),
        Rule::prefix(r"Use portal to\s+", "Использовать портал в "),
        Rule::prefix(r"Waypoint to\s+", "Waypoint в "),
        Rule::prefix(r"Take waypoint to\s+", "Waypoint в "),
        Rule::prefix(r"TP to\s+", "ТП в "),
        Rule::prefix(r"Tag Waypoint", "Активировать Waypoint"),
        // Combat
        Rule::prefix(r"Kill\s+", "Убить "),
        Rule::prefix(r"Slay\s+", "Убить "),
        // Zone transitions
        Rule::prefix(r"Enter\s+", "Войти в "),
        Rule::prefix(r"Exit\s+", "Выйти из "),
        Rule::prefix(r"Leave\s+", "Покинуть "),
        // NPC interaction
        Rule::prefix(r"Talk to\s+", "Поговорить с "),
        Rule::prefix(r"Speak with\s+", "Поговорить с "),
        Rule::prefix(r"Speak to\s+", "Поговорить с "),
        Rule::prefix(r"Summon\s+", "Призвать "),
        Rule::prefix(r"Call\s+", "Позвать "),
        // Quest completion
        Rule::prefix(r"Complete\s+", "Завершить "),
        Rule::prefix(r"Finish\s+", "Завершить "),
        // Searching
        Rule::prefix(r"Find\s+", "Найти "),
        Rule::prefix(r"Locate\s+", "Найти "),
        Rule::prefix(r"Search for\s+", "Искать "),
        // Items
        Rule::prefix(r"Get\s+", "Получить "),
        Rule::prefix(r"Take\s+", "Взять "),
        Rule::prefix(r"Grab\s+", "Взять "),
        Rule::prefix(r"Pick up\s+", "Подобрать "),
        Rule::prefix(r"Pickup\s+", "Подобрать "),
        Rule::prefix(r"Loot\s+", "Забрать "),
        // Objects
        Rule::prefix(r"Use\s+", "Использовать "),
        Rule::prefix(r"Activate\s+", "Активировать "),
        Rule::prefix(r"Interact with\s+", "Взаимодействовать с "),
        Rule::prefix(r"Defeat\s+", "Победить "),
        Rule::prefix(r"Destroy\s+", "Уничтожить "),
        Rule::prefix(r"Break\s+", "Сломать "),
        Rule::prefix(r"Open\s+", "Открыть "),
        Rule::prefix(r"Close\s+", "Закрыть "),
        Rule::prefix(r"Clear\s+", "Очистить "),
        // Travel
        Rule::prefix(r"Return to\s+", "Вернуться в "),
        Rule::prefix(r"Go to\s+", "Перейти в "),
        Rule::prefix(r"Go back to\s+", "Вернуться в "),
        Rule::prefix(r"Travel to\s+", "Переместиться в "),
        Rule::prefix(r"Head to\s+", "Направиться в "),
        Rule::prefix(r"Move to\s+", "Перейти в "),
        Rule::prefix(r"Rush to\s+", "Бежать в "),
        Rule::prefix(r"Proceed to\s+", "Перейти в "),
        Rule::prefix(r"Teleport to\s+", "Телепортироваться в "),
        Rule::prefix(r"Visit\s+", "Посетить "),
        // Rescue
        Rule::prefix(r"Rescue\s+", "Спасти "),
        Rule::prefix(r"Save\s+", "Спасти "),
        Rule::prefix(r"Free\s+", "Освободить "),
        Rule::prefix(r"Help\s+", "Помочь "),
        Rule::prefix(r"Protect\s+", "Защитить "),
        // Collecting
        Rule::prefix(r"Collect\s+", "Собрать "),
        Rule::prefix(r"Gather\s+", "Собрать "),
        // Escort
        Rule::prefix(r"Follow\s+", "Следовать за "),
        Rule::prefix(r"Escort\s+", "Сопроводить "),
        // Exploration
        Rule::prefix(r"Explore\s+", "Исследовать "),
        Rule::prefix(r"Cross\s+", "Пересечь "),
        Rule::prefix(r"Navigate\s+", "Пройти через "),
        Rule::prefix(r"Touch\s+", "Коснуться "),
        Rule::prefix(r"Click\s+", "Нажать на "),
        // Vertical movement
        Rule::prefix(r"Ascend\s+", "Подняться в "),
        Rule::prefix(r"Descend\s+", "Спуститься в "),
        Rule::prefix(r"Climb\s+", "Подняться на "),
        // Quest start
        Rule::prefix(r"Accept\s+", "Принять "),
        Rule::prefix(r"Start\s+", "Начать "),
        Rule::prefix(r"Begin\s+", "Начать "),
        // Vendors
        Rule::prefix(r"Buy\s+", "Купить "),
        Rule::prefix(r"Sell\s+", "Продать "),
        Rule::prefix(r"Purchase\s+", "Купить "),
        // Inspection
        Rule::prefix(r"Check\s+", "Проверить "),
        Rule::prefix(r"Examine\s+", "Осмотреть "),
        Rule::prefix(r"Inspect\s+", "Осмотреть "),
        Rule::prefix(r"Read\s+", "Прочитать "),
        // Pace
        Rule::prefix(r"Run to\s+", "Бежать в "),
        Rule::prefix(r"Walk to\s+", "Идти в "),
        // Waiting
        Rule::prefix(r"Wait for\s+", "Подождать "),
        Rule::prefix(r"Wait\s+", "Подождать "),
    ]
});

/// Optional-step markers at the start of a description. Applied after the
/// leading action pass, unconditionally and in order.
pub static OPTIONAL_MARKER_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::prefix(r"Optional:\s*", "Опционально: "),
        Rule::prefix(r"\[Optional\]\s*", "[Опционально] "),
    ]
});

/// Embedded phrases inside step descriptions.
pub static DESCRIPTION_PHRASE_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::phrase(r"\bnear waypoint\b", "рядом с waypoint"),
        Rule::phrase(r"\bnear\s+", "рядом с "),
        Rule::phrase(r"\bfor\s+Skill\s*\+?\s*Support\s+Gem\b", "за Skill + Support Gem"),
        Rule::phrase(r"\bfor\s+Passive\s+Point\b", "за Passive Point"),
        Rule::phrase(r"\bfor\s+Skill\s+Gem\b", "за Skill Gem"),
        Rule::phrase(r"\bfor\s+reward\b", "за награду"),
        Rule::phrase(r"\bGrants\s+", "Даёт "),
        Rule::phrase(r"\bbonus\b", "бонус"),
        Rule::phrase(r"\bResistance\b", "сопротивление"),
        Rule::phrase(r"\bCold\s+", "холоду "),
        Rule::phrase(r"\bFire\s+", "огню "),
        Rule::phrase(r"\bLightning\s+", "молнии "),
        Rule::phrase(r"\band\s+", "и "),
        Rule::phrase(r"\bwaypoint\b", "waypoint"),
        Rule::phrase_exact(r"\bWaypoint\b", "Waypoint"),
        Rule::phrase_exact(r"\bAND\b", "И"),
        Rule::phrase(r"\bDesert Map:\s*", "Карта пустыни: "),
    ]
});

/// Leading locational and directional phrases for hints and layout tips.
///
/// Unlike the description pass these run sequentially: every matching rule
/// rewrites the string, and later rules test the rewritten text.
pub static HINT_PREFIX_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        // Locations
        Rule::prefix(r"Often located near\s+", "Обычно находится рядом с "),
        Rule::prefix(r"Usually found near\s+", "Обычно находится рядом с "),
        Rule::prefix(r"Located near\s+", "Находится рядом с "),
        Rule::prefix(r"Found near\s+", "Находится рядом с "),
        Rule::prefix(r"Can be found near\s+", "Можно найти рядом с "),
        Rule::prefix(r"Look for\s+", "Ищите "),
        Rule::prefix(r"Check near\s+", "Проверьте рядом с "),
        Rule::prefix(r"Usually at\s+", "Обычно в "),
        Rule::prefix(r"At the\s+", "В "),
        Rule::prefix(r"Near the\s+", "Рядом с "),
        Rule::prefix(r"Inside\s+", "Внутри "),
        Rule::prefix(r"Outside\s+", "Снаружи "),
        Rule::prefix(r"Behind\s+", "Позади "),
        Rule::prefix(r"In front of\s+", "Перед "),
        Rule::prefix(r"Opposite of\s+", "Напротив "),
        Rule::prefix(r"Opposite side of\s+", "На противоположной стороне "),
        // Navigation
        Rule::prefix(r"Follow the\s+", "Следуйте по "),
        Rule::prefix(r"Follow\s+", "Следуйте "),
        Rule::prefix(r"Stick to the\s+", "Держитесь "),
        Rule::prefix(r"Stick to\s+", "Держитесь "),
        Rule::prefix(r"Go left\b", "Идите налево"),
        Rule::prefix(r"Go right\b", "Идите направо"),
        Rule::prefix(r"Go north\b", "Идите на север"),
        Rule::prefix(r"Go south\b", "Идите на юг"),
        Rule::prefix(r"Go east\b", "Идите на восток"),
        Rule::prefix(r"Go west\b", "Идите на запад"),
        Rule::prefix(r"Head\s+", "Направляйтесь "),
        Rule::prefix(r"Aim for\s+", "Цельтесь на "),
        Rule::prefix(r"Walk\s+", "Идите "),
        Rule::prefix(r"Run\s+", "Бегите "),
        Rule::prefix(r"Exit is\s+", "Выход "),
        Rule::prefix(r"Entrance is\s+", "Вход "),
        Rule::prefix(r"Path is\s+", "Путь "),
        // Actions
        Rule::prefix(r"Kill\s+", "Убейте "),
        Rule::prefix(r"Find\s+", "Найдите "),
        Rule::prefix(r"Click\s+", "Нажмите "),
        Rule::prefix(r"Place portal\s+", "Поставьте портал "),
        Rule::prefix(r"Tag Waypoint", "Активируйте Waypoint"),
        // Phrasing
        Rule::prefix(r"This is a\s+", "Это "),
        Rule::prefix(r"No need to\s+", "Не нужно "),
        Rule::prefix(r"Make sure to\s+", "Обязательно "),
        Rule::prefix(r"Don't forget to\s+", "Не забудьте "),
    ]
});

/// Common words and phrases inside hints and layout tips. Includes the
/// article-stripping rule that deletes "the" wherever it appears.
pub static HINT_PHRASE_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::phrase(r"\bImportant NPC\b", "Важный NPC"),
        Rule::phrase(r"\bfor quest progression\b", "для прохождения квеста"),
        Rule::phrase(r"\bquest progression\b", "прохождение квеста"),
        Rule::phrase(r"\bafter completing\b", "после завершения"),
        Rule::phrase(r"\bbefore entering\b", "перед входом в"),
        Rule::phrase(r"\bto the left\b", "слева"),
        Rule::phrase(r"\bto the right\b", "справа"),
        Rule::phrase(r"\bon the left\b", "слева"),
        Rule::phrase(r"\bon the right\b", "справа"),
        Rule::phrase(r"\bnorth\b", "на севере"),
        Rule::phrase(r"\bsouth\b", "на юге"),
        Rule::phrase(r"\beast\b", "на востоке"),
        Rule::phrase(r"\bwest\b", "на западе"),
        Rule::phrase(r"\bnorth-east\b", "на северо-востоке"),
        Rule::phrase(r"\bnorth-west\b", "на северо-западе"),
        Rule::phrase(r"\bsouth-east\b", "на юго-востоке"),
        Rule::phrase(r"\bsouth-west\b", "на юго-западе"),
        Rule::phrase(r"\babove\b", "выше"),
        Rule::phrase(r"\bbelow\b", "ниже"),
        Rule::phrase(r"\balong\b", "вдоль"),
        Rule::phrase(r"\bacross\b", "через"),
        Rule::phrase(r"\bthrough\b", "через"),
        Rule::phrase(r"\binto\b", "в"),
        Rule::phrase(r"\bfrom\b", "из"),
        Rule::phrase(r"\bwith\b", "с"),
        Rule::phrase(r"\barena\b", "арену"),
        Rule::phrase(r"\broad\b", "дороге"),
        Rule::phrase(r"\bwall\b", "стены"),
        Rule::phrase(r"\bedge\b", "краю"),
        Rule::phrase(r"\bcliff\b", "обрыва"),
        Rule::phrase(r"\bcoast\b", "побережью"),
        Rule::phrase(r"\briver\b", "реке"),
        Rule::phrase(r"\bbridge\b", "мост"),
        Rule::phrase(r"\bentrance\b", "вход"),
        Rule::phrase(r"\bexit\b", "выход"),
        Rule::phrase(r"\bdead end\b", "тупик"),
        Rule::phrase(r"\bzone\b", "зоны"),
        Rule::phrase(r"\bmap\b", "карте"),
        Rule::phrase(r"\blayout\b", "лейаут"),
        Rule::phrase(r"\bpattern\b", "паттерн"),
        Rule::phrase(r"\btriangle\b", "треугольник"),
        Rule::phrase(r"\bdirection\b", "направлении"),
        Rule::phrase(r"\bopposite\b", "напротив"),
        Rule::phrase(r"\bguaranteed\b", "гарантировано"),
        Rule::phrase(r"\brandom\b", "случайно"),
        Rule::phrase(r"\bfixed\b", "фиксировано"),
        Rule::phrase(r"\bstatic\b", "статично"),
        Rule::phrase(r"\busually\b", "обычно"),
        Rule::phrase(r"\brarely\b", "редко"),
        Rule::phrase(r"\balways\b", "всегда"),
        Rule::phrase(r"\bnever\b", "никогда"),
        Rule::phrase(r"\bif\b", "если"),
        Rule::phrase(r"\bthen\b", "затем"),
        Rule::phrase(r"\bor\b", "или"),
        Rule::phrase(r"\band\b", "и"),
        Rule::phrase(r"\bbut\b", "но"),
        Rule::phrase(r"\bthe\s+", ""),
        Rule::phrase(r"\bOptional:\s*", "Опционально: "),
        Rule::phrase(r"\bLeague-start only\b", "Только для старта лиги"),
        Rule::phrase(r"\bLeague-start recommended\b", "Рекомендуется для старта лиги"),
    ]
});

/// Reward terms. Every entry currently maps a canonical game term to
/// itself, so the pass only normalizes capitalization.
pub static REWARD_RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::phrase(r"\bSkill Gem\b", "Skill Gem"),
        Rule::phrase(r"\bSupport Gem\b", "Support Gem"),
        Rule::phrase(r"\bPassive Point\b", "Passive Point"),
        Rule::phrase(r"\bBook of Skill\b", "Book of Skill"),
        Rule::phrase(r"\bRespec Point\b", "Respec Point"),
        Rule::phrase(r"\bQuicksilver Flask\b", "Quicksilver Flask"),
        Rule::phrase(r"\bMovement Skills\b", "Movement Skills"),
        Rule::phrase(r"\bUtility\b", "Utility"),
        Rule::phrase(r"\bHeralds\b", "Heralds"),
    ]
});
