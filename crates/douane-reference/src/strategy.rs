use tracing::debug;

/// A named extraction strategy over the raw document text.
///
/// Strategies are evaluated as an ordered chain: the first one yielding a
/// non-empty result wins and later strategies are not consulted. This keeps
/// format-drift fallbacks explicit instead of hiding them behind exception
/// control flow.
pub struct Strategy<T> {
    pub name: &'static str,
    pub run: fn(&str) -> Vec<T>,
}

/// Run `strategies` in order, returning the first non-empty extraction.
pub fn first_non_empty<T>(content: &str, strategies: &[Strategy<T>]) -> Vec<T> {
    for strategy in strategies {
        let records = (strategy.run)(content);
        if !records.is_empty() {
            debug!(
                strategy = strategy.name,
                count = records.len(),
                "extraction strategy matched"
            );
            return records;
        }
        debug!(strategy = strategy.name, "extraction strategy yielded nothing");
    }
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(content: &str) -> Vec<String> {
        content.lines().map(str::to_string).collect()
    }

    fn nothing(_: &str) -> Vec<String> {
        Vec::new()
    }

    #[test]
    fn chain_stops_at_first_non_empty_strategy() {
        let strategies = [
            Strategy {
                name: "empty",
                run: nothing,
            },
            Strategy {
                name: "lines",
                run: lines,
            },
        ];
        let result = first_non_empty("a\nb", &strategies);
        assert_eq!(result, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn chain_of_failing_strategies_returns_empty() {
        let strategies = [Strategy {
            name: "empty",
            run: nothing,
        }];
        assert!(first_non_empty::<String>("anything", &strategies).is_empty());
    }
}
