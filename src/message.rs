use serde_derive::*;

#[derive(Clone, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub enum FromPlayerMessage {
    Initialize { name: String },
    Submit { answer: String },
    Hint,
    NewRound,
    Disconnect,
}

#[derive(Clone, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub enum ToPlayerMessage {
    PoseQuestion {
        question: String,
        letter: char,
        category: String,
    },
    Feedback {
        correct: bool,
        message: String,
    },
    Hint {
        text: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_are_externally_tagged() {
        let message: FromPlayerMessage =
            serde_json::from_str(r#"{"Submit":{"answer":"Bart"}}"#).unwrap();
        assert_eq!(
            message,
            FromPlayerMessage::Submit {
                answer: "Bart".to_string()
            }
        );

        let message: FromPlayerMessage = serde_json::from_str(r#""NewRound""#).unwrap();
        assert_eq!(message, FromPlayerMessage::NewRound);

        let message: FromPlayerMessage =
            serde_json::from_str(r#"{"Initialize":{"name":"Sanne"}}"#).unwrap();
        assert_eq!(
            message,
            FromPlayerMessage::Initialize {
                name: "Sanne".to_string()
            }
        );
    }

    #[test]
    fn question_message_shape() {
        let message = ToPlayerMessage::PoseQuestion {
            question: "Een jongensnaam dat begint met de letter B".to_string(),
            letter: 'B',
            category: "Een jongensnaam".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({
                "PoseQuestion": {
                    "question": "Een jongensnaam dat begint met de letter B",
                    "letter": "B",
                    "category": "Een jongensnaam"
                }
            })
        );
    }

    #[test]
    fn unknown_message_is_rejected() {
        assert!(serde_json::from_str::<FromPlayerMessage>(r#"{"Guess":{"number":"3"}}"#).is_err());
    }
}
