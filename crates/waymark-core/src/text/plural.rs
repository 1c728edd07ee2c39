//! Count-based plural form selection.

/// Select the grammatical form of a word for `count` under the Slavic
/// pluralization rule.
///
/// The teen range 11 through 19 of the last two digits always takes the
/// many form; otherwise the last digit decides: 1 takes the one form,
/// 2 through 4 the few form, everything else (including 0) the many form.
pub fn plural_form<'a>(count: usize, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let last_two = count % 100;
    let last_one = count % 10;

    if (11..=19).contains(&last_two) {
        return many;
    }
    if last_one == 1 {
        return one;
    }
    if (2..=4).contains(&last_one) {
        return few;
    }
    many
}

/// The Russian task noun for a count, as shown in zone group headers.
pub fn task_label(count: usize) -> &'static str {
    plural_form(count, "задача", "задачи", "задач")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(count: usize) -> &'static str {
        plural_form(count, "one", "few", "many")
    }

    #[test]
    fn test_one_form() {
        assert_eq!(form(1), "one");
        assert_eq!(form(21), "one");
        assert_eq!(form(101), "one");
        assert_eq!(form(1001), "one");
    }

    #[test]
    fn test_few_form() {
        assert_eq!(form(2), "few");
        assert_eq!(form(3), "few");
        assert_eq!(form(4), "few");
        assert_eq!(form(22), "few");
        assert_eq!(form(104), "few");
    }

    #[test]
    fn test_many_form() {
        assert_eq!(form(0), "many");
        assert_eq!(form(5), "many");
        assert_eq!(form(10), "many");
        assert_eq!(form(20), "many");
        assert_eq!(form(100), "many");
    }

    #[test]
    fn test_teens_always_take_many_form() {
        for count in 11..=19 {
            assert_eq!(form(count), "many");
        }
        // The rule keys on the last two digits, not the whole number.
        assert_eq!(form(111), "many");
        assert_eq!(form(211), "many");
        assert_eq!(form(1012), "many");
    }

    #[test]
    fn test_task_label() {
        assert_eq!(task_label(1), "задача");
        assert_eq!(task_label(3), "задачи");
        assert_eq!(task_label(7), "задач");
        assert_eq!(task_label(11), "задач");
    }
}
