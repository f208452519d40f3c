/// Personal-name simplification for author fields
/// Reduce a personal name to its display form: three or more whitespace
/// tokens collapse to first + last (dropping middle/patronymic tokens),
/// shorter names pass through unchanged.
#[must_use = "returns the simplified name"]
pub fn simplify_name(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    if parts.len() >= 3 {
        format!("{} {}", parts[0], parts[parts.len() - 1])
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drops_patronymic() {
        assert_eq!(simplify_name("Ivan Ivanovich Petrov"), "Ivan Petrov");
    }

    #[test]
    fn test_two_tokens_unchanged() {
        assert_eq!(simplify_name("Jane Doe"), "Jane Doe");
    }

    #[test]
    fn test_single_token_unchanged() {
        assert_eq!(simplify_name("Homer"), "Homer");
    }

    #[test]
    fn test_four_tokens_keep_first_and_last() {
        assert_eq!(
            simplify_name("Gabriel Jose Garcia Marquez"),
            "Gabriel Marquez"
        );
    }
}
