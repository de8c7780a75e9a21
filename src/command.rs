/// One fully classified instruction, derived from a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    Ping,
    Stop,
    SetSpeed { left: i64, right: i64 },
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    SetBaseSpeed { value: String },
    Unrecognized { raw: String },
}

/// Classifies a trimmed, non-empty line. Verb matching is case-insensitive;
/// every input yields exactly one variant, malformed speeds included.
pub(crate) fn parse(line: &str) -> Command {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [verb] => match verb.to_ascii_uppercase().as_str() {
            "PING" => Command::Ping,
            "STOP" => Command::Stop,
            "FWD" | "FORWARD" => Command::Forward,
            "BACK" | "BACKWARD" => Command::Backward,
            "LEFT" => Command::TurnLeft,
            "RIGHT" => Command::TurnRight,
            _ => Command::Unrecognized {
                raw: line.to_string(),
            },
        },
        [verb, a, b] if verb.eq_ignore_ascii_case("SPEED") => {
            match (a.parse::<i64>(), b.parse::<i64>()) {
                (Ok(left), Ok(right)) => Command::SetSpeed { left, right },
                _ => Command::Unrecognized {
                    raw: line.to_string(),
                },
            }
        }
        // the base-speed token keeps its original case
        [set, spd, .., value]
            if set.eq_ignore_ascii_case("SET") && spd.eq_ignore_ascii_case("SPD") =>
        {
            Command::SetBaseSpeed {
                value: (*value).to_string(),
            }
        }
        _ => Command::Unrecognized {
            raw: line.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_match_case_insensitively() {
        assert_eq!(parse("PING"), Command::Ping);
        assert_eq!(parse("ping"), Command::Ping);
        assert_eq!(parse("Stop"), Command::Stop);
        assert_eq!(parse("fwd"), Command::Forward);
        assert_eq!(parse("FORWARD"), Command::Forward);
        assert_eq!(parse("back"), Command::Backward);
        assert_eq!(parse("Backward"), Command::Backward);
        assert_eq!(parse("left"), Command::TurnLeft);
        assert_eq!(parse("RIGHT"), Command::TurnRight);
    }

    #[test]
    fn speed_with_two_integers() {
        assert_eq!(
            parse("SPEED 10 20"),
            Command::SetSpeed {
                left: 10,
                right: 20
            }
        );
        assert_eq!(
            parse("speed -50 300"),
            Command::SetSpeed {
                left: -50,
                right: 300
            }
        );
    }

    #[test]
    fn malformed_speed_falls_back_to_unrecognized() {
        assert_eq!(
            parse("SPEED 10"),
            Command::Unrecognized {
                raw: "SPEED 10".to_string()
            }
        );
        assert_eq!(
            parse("SPEED 10 20 30"),
            Command::Unrecognized {
                raw: "SPEED 10 20 30".to_string()
            }
        );
        assert_eq!(
            parse("SPEED ten 20"),
            Command::Unrecognized {
                raw: "SPEED ten 20".to_string()
            }
        );
        assert_eq!(
            parse("SPEED"),
            Command::Unrecognized {
                raw: "SPEED".to_string()
            }
        );
    }

    #[test]
    fn set_spd_keeps_token_case() {
        assert_eq!(
            parse("SET SPD 120"),
            Command::SetBaseSpeed {
                value: "120".to_string()
            }
        );
        assert_eq!(
            parse("set spd Fast"),
            Command::SetBaseSpeed {
                value: "Fast".to_string()
            }
        );
    }

    #[test]
    fn trailing_tokens_make_a_verb_unrecognized() {
        assert_eq!(
            parse("PING now"),
            Command::Unrecognized {
                raw: "PING now".to_string()
            }
        );
    }

    #[test]
    fn anything_else_is_unrecognized_with_the_raw_line() {
        assert_eq!(
            parse("BOGUS"),
            Command::Unrecognized {
                raw: "BOGUS".to_string()
            }
        );
    }
}
