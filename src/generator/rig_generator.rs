use super::{Generator, GeneratorError, StreamEvent};
use crate::model::{ChatMessage, ChatRole, TaskPlan};
use crate::prompts::PLAN_EXTRACTOR_PREAMBLE;
use async_trait::async_trait;
use futures_util::StreamExt;
use rig::{
    agent::MultiTurnStreamItem,
    client::CompletionClient,
    completion::{CompletionModel, GetTokenUsage, Message, Prompt},
    streaming::{StreamedAssistantContent, StreamingChat},
};
use tokio::sync::mpsc;
use tracing::debug;

pub struct RigGenerator<C: CompletionClient> {
    client: C,
    model: String,
}

/// A chat request reshaped for the backend: system turns merged into the
/// preamble, the final turn as prompt and the rest as history.
#[derive(Debug, PartialEq)]
struct Conversation {
    preamble: String,
    prompt: ChatMessage,
    history: Vec<ChatMessage>,
}

impl Conversation {
    fn split(system: &str, messages: &[ChatMessage]) -> Result<Self, GeneratorError> {
        let mut preamble = system.to_string();
        let mut turns = Vec::with_capacity(messages.len());

        for msg in messages {
            match msg.role {
                ChatRole::System => {
                    preamble.push_str("\n\n");
                    preamble.push_str(&msg.content);
                }
                ChatRole::User | ChatRole::Assistant => turns.push(msg.clone()),
            }
        }

        let prompt = turns.pop().ok_or(GeneratorError::EmptyConversation)?;
        Ok(Self {
            preamble,
            prompt,
            history: turns,
        })
    }
}

fn to_rig_message(msg: &ChatMessage) -> Message {
    match msg.role {
        ChatRole::Assistant => Message::assistant(msg.content.clone()),
        ChatRole::User | ChatRole::System => Message::user(msg.content.clone()),
    }
}

impl<C: CompletionClient> RigGenerator<C> {
    pub fn new(client: C, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }

    async fn run_stream<M, R, A>(
        agent: A,
        prompt: Message,
        history: Vec<Message>,
        tx: mpsc::Sender<StreamEvent>,
    ) -> Result<String, GeneratorError>
    where
        M: CompletionModel + 'static,
        R: Clone + Unpin + GetTokenUsage,
        A: StreamingChat<M, R>,
        A::Hook: 'static,
    {
        let mut stream = agent.stream_chat(prompt, history).await;
        let mut response_text = String::new();

        while let Some(item) = stream.next().await {
            match item {
                Ok(MultiTurnStreamItem::StreamAssistantItem(StreamedAssistantContent::Text(
                    text,
                ))) => {
                    response_text.push_str(&text.text);
                    if tx.send(StreamEvent::TextDelta(text.text)).await.is_err() {
                        debug!("Chat client went away, dropping the rest of the stream");
                        return Ok(response_text);
                    }
                }
                Ok(MultiTurnStreamItem::FinalResponse(res)) => {
                    if response_text.is_empty() {
                        response_text = res.response().to_string();
                        if !response_text.is_empty() {
                            let _ = tx.send(StreamEvent::TextDelta(response_text.clone())).await;
                        }
                    }
                }
                Err(e) => {
                    let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                    return Err(GeneratorError::Stream(e.to_string()));
                }
                _ => {}
            }
        }

        let _ = tx.send(StreamEvent::Done).await;
        Ok(response_text)
    }
}

#[async_trait]
impl<C> Generator for RigGenerator<C>
where
    C: CompletionClient + Send + Sync,
    C::CompletionModel: 'static,
{
    async fn stream_chat(
        &self,
        system: &str,
        messages: &[ChatMessage],
        tx: mpsc::Sender<StreamEvent>,
    ) -> Result<String, GeneratorError> {
        let conversation = match Conversation::split(system, messages) {
            Ok(c) => c,
            Err(e) => {
                let _ = tx.send(StreamEvent::Error(e.to_string())).await;
                return Err(e);
            }
        };

        let agent = self
            .client
            .agent(&self.model)
            .preamble(&conversation.preamble)
            .build();
        let history = conversation.history.iter().map(to_rig_message).collect();

        Self::run_stream(agent, to_rig_message(&conversation.prompt), history, tx).await
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, GeneratorError> {
        let agent = self.client.agent(&self.model).build();
        let text = agent
            .prompt(prompt)
            .await
            .map_err(|e| GeneratorError::Completion(e.to_string()))?;
        Ok(text.to_string())
    }

    async fn generate_plan(&self, prompt: &str) -> Result<TaskPlan, GeneratorError> {
        let extractor = self
            .client
            .extractor::<TaskPlan>(&self.model)
            .preamble(PLAN_EXTRACTOR_PREAMBLE)
            .build();
        let plan = extractor
            .extract(prompt)
            .await
            .map_err(|e| GeneratorError::Extraction(e.to_string()))?;

        if plan.tasks.is_empty() {
            return Err(GeneratorError::EmptyPlan);
        }
        Ok(plan)
    }
}
