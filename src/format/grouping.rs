use serde::{Deserialize, Serialize};

/// digit grouping of the integer part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grouping {
    /// groups of three: 5,000,000
    Thousands,
    /// last three digits, then groups of two: 50,00,000
    Indian,
}

/// insert `separator` into a string of ascii digits
pub fn group_digits(digits: &str, grouping: Grouping, separator: char) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let group = match grouping {
        Grouping::Thousands => 3,
        Grouping::Indian => 2,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    let mut out = String::with_capacity(len + groups.len());
    for g in groups {
        out.push_str(g);
        out.push(separator);
    }
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(group_digits("0", Grouping::Thousands, ','), "0");
        assert_eq!(group_digits("999", Grouping::Thousands, ','), "999");
        assert_eq!(group_digits("1000", Grouping::Thousands, ','), "1,000");
        assert_eq!(group_digits("5000000", Grouping::Thousands, ','), "5,000,000");
        assert_eq!(group_digits("123456789", Grouping::Thousands, '.'), "123.456.789");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(group_digits("1000", Grouping::Indian, ','), "1,000");
        assert_eq!(group_digits("100000", Grouping::Indian, ','), "1,00,000");
        assert_eq!(group_digits("5000000", Grouping::Indian, ','), "50,00,000");
        assert_eq!(group_digits("123456789", Grouping::Indian, ','), "12,34,56,789");
    }
}
