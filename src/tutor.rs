//! Conversación con el tutor IA.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::llm::{GenerateRequest, GenerateResponse, LlmError, ToolExecutor};
use crate::model::{ChatMessage, Role};

/// Rondas de herramientas permitidas por turno.
pub const TUTOR_MAX_STEPS: u32 = 5;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TutorMode {
    Beginner,
    #[default]
    General,
    Advanced,
}

impl TutorMode {
    pub const ALL: [TutorMode; 3] = [TutorMode::Beginner, TutorMode::General, TutorMode::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            TutorMode::Beginner => "beginner",
            TutorMode::General => "general",
            TutorMode::Advanced => "advanced",
        }
    }
}

const BASE_PROMPT: &str = "You are an expert Solana blockchain educator and AI tutor specializing in gamified learning. Your role is to:

1. **Provide clear, engaging explanations** of Solana concepts
2. **Create personalized quizzes** when requested
3. **Guide hands-on learning** with practical examples
4. **Encourage progress** with positive reinforcement
5. **Adapt to the user's level** and learning pace";

const BEGINNER_FOCUS: &str = "
**BEGINNER MODE:** Focus on:
- Basic blockchain concepts (blocks, transactions, wallets)
- What makes Solana unique (speed, low fees, PoH)
- Simple analogies and real-world examples
- Fundamental terminology
- Encourage questions and provide gentle guidance";

const GENERAL_FOCUS: &str = "
**GENERAL MODE:** Cover:
- Solana architecture and consensus mechanism
- SPL tokens, NFTs, and DeFi protocols
- Development basics with Rust and JavaScript
- Popular dApps and use cases
- Balance theory with practical applications";

const ADVANCED_FOCUS: &str = "
**ADVANCED MODE:** Deep dive into:
- Solana program development and deployment
- Cross-program invocations and PDAs
- Performance optimization and account structure
- Advanced DeFi protocols and composability
- Security best practices and auditing";

const TEACHING_STYLE: &str = "

**Teaching Style:**
- Use emojis and formatting for engagement
- Break complex topics into digestible parts
- Provide code examples when relevant
- Create interactive quiz questions when requested
- Reward progress and effort
- Connect concepts to real-world applications

**Quiz Generation Guidelines:**
When creating quizzes:
- Match the current learning mode difficulty
- Include 4 multiple choice options (A, B, C, D)
- Provide immediate feedback and explanations
- Track conceptual understanding
- Suggest next topics based on performance

You can interact with the Solana blockchain using your tools when demonstrations are helpful for learning.";

pub fn system_prompt(mode: TutorMode) -> String {
    let focus = match mode {
        TutorMode::Beginner => BEGINNER_FOCUS,
        TutorMode::General => GENERAL_FOCUS,
        TutorMode::Advanced => ADVANCED_FOCUS,
    };
    format!(
        "{BASE_PROMPT}\n\n**Current Learning Mode: {}**{focus}{TEACHING_STYLE}",
        mode.as_str().to_uppercase()
    )
}

#[derive(Clone, Debug)]
pub struct TutorChat {
    messages: Vec<ChatMessage>,
    pub input: String,
    mode: TutorMode,
    waiting: bool,
}

impl TutorChat {
    pub fn new(welcome: impl Into<String>) -> Self {
        Self {
            messages: vec![ChatMessage::assistant(welcome)],
            input: String::new(),
            mode: TutorMode::default(),
            waiting: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn mode(&self) -> TutorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: TutorMode) {
        self.mode = mode;
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    pub fn can_send(&self) -> bool {
        !self.waiting && !self.input.trim().is_empty()
    }

    /// Pasa la entrada al historial y arma la petición con todo el historial.
    pub fn send(&mut self, tools: Option<Arc<dyn ToolExecutor>>) -> Option<GenerateRequest> {
        if !self.can_send() {
            return None;
        }
        let text = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::user(text));
        self.waiting = true;
        Some(GenerateRequest {
            messages: self.messages.clone(),
            system: Some(system_prompt(self.mode)),
            max_steps: TUTOR_MAX_STEPS,
            tools,
            ..Default::default()
        })
    }

    pub fn on_reply(
        &mut self,
        result: Result<GenerateResponse, LlmError>,
        empty_reply: &str,
        apology: &str,
    ) {
        if !self.waiting {
            log::debug!("Tutor: respuesta sin turno pendiente, se ignora");
            return;
        }
        self.waiting = false;
        let content = match result {
            Ok(response) if !response.text.trim().is_empty() => response.text,
            Ok(_) => empty_reply.to_string(),
            Err(err) => {
                log::error!("Error del tutor IA: {err}");
                apology.to_string()
            }
        };
        self.messages.push(ChatMessage::assistant(content));
    }

    /// Cambia el saludo si todavía es el único mensaje.
    pub fn relocalize_welcome(&mut self, welcome: &str) {
        if let [only] = self.messages.as_mut_slice() {
            if only.role == Role::Assistant {
                only.content = welcome.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::TextGenerator;
    use crate::llm::testing::ScriptedGenerator;
    use futures::executor::block_on;

    const EMPTY: &str = "trouble";
    const SORRY: &str = "sorry";

    #[test]
    fn system_prompt_names_mode_and_focus() {
        let p = system_prompt(TutorMode::Advanced);
        assert!(p.contains("**Current Learning Mode: ADVANCED**"));
        assert!(p.contains("Cross-program invocations and PDAs"));
        assert!(!p.contains("BEGINNER MODE"));
        assert!(system_prompt(TutorMode::Beginner).contains("BEGINNER MODE"));
    }

    #[test]
    fn empty_input_is_rejected() {
        let mut chat = TutorChat::new("hola");
        chat.input = "   ".into();
        assert!(chat.send(None).is_none());
        assert_eq!(chat.messages().len(), 1);
    }

    #[test]
    fn turn_sends_full_transcript_and_appends_reply() {
        let generator = ScriptedGenerator::new(vec![Ok("PoH es un reloj".into())]);
        let mut chat = TutorChat::new("bienvenida");
        chat.set_mode(TutorMode::Beginner);
        chat.input = "¿Qué es PoH?".into();

        let request = chat.send(None).unwrap();
        assert!(chat.input.is_empty());
        assert!(chat.is_waiting());
        assert!(!chat.can_send());
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.max_steps, TUTOR_MAX_STEPS);
        assert!(request.system.unwrap().contains("BEGINNER"));

        let reply = block_on(generator.generate(GenerateRequest::default()));
        chat.on_reply(reply, EMPTY, SORRY);
        let last = chat.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, "PoH es un reloj");
        assert_eq!(chat.messages().len(), 3);
    }

    fn send_text(chat: &mut TutorChat, text: &str) -> Option<GenerateRequest> {
        chat.input = text.into();
        chat.send(None)
    }

    #[test]
    fn empty_and_failed_replies_become_canned_text() {
        let mut chat = TutorChat::new("w");
        send_text(&mut chat, "q1").unwrap();
        chat.on_reply(Ok(GenerateResponse { text: "  ".into() }), EMPTY, SORRY);
        assert_eq!(chat.messages().last().unwrap().content, EMPTY);

        send_text(&mut chat, "q2").unwrap();
        chat.on_reply(Err(LlmError::EmptyResponse), EMPTY, SORRY);
        assert_eq!(chat.messages().last().unwrap().content, SORRY);
        assert_eq!(chat.messages().len(), 5);
    }

    #[test]
    fn no_second_turn_while_waiting() {
        let mut chat = TutorChat::new("w");
        send_text(&mut chat, "q1").unwrap();
        assert!(send_text(&mut chat, "q2").is_none());
        assert_eq!(chat.input, "q2");

        chat.on_reply(Ok(GenerateResponse { text: "a1".into() }), EMPTY, SORRY);
        chat.on_reply(Ok(GenerateResponse { text: "repetida".into() }), EMPTY, SORRY);
        assert_eq!(chat.messages().len(), 3);
    }

    #[test]
    fn welcome_follows_locale_until_conversation_starts() {
        let mut chat = TutorChat::new("welcome");
        chat.relocalize_welcome("ようこそ");
        assert_eq!(chat.messages()[0].content, "ようこそ");

        send_text(&mut chat, "q").unwrap();
        chat.relocalize_welcome("welcome");
        assert_eq!(chat.messages()[0].content, "ようこそ");
    }
}
