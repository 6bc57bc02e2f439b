//! GenerateReplyHandler - the conversation orchestrator.
//!
//! One call handles one incoming turn:
//!
//! 1. Resolve the domain (caller hint, pending request, then the router)
//! 2. Ask for missing goal fields when the domain supports clarification
//! 3. Call the persona's model with the tool catalog
//! 4. Run requested tools in order and call the model again
//!
//! Every failure ends in a fixed sentence. Nothing here returns `Err`.

use std::sync::Arc;

use crate::application::handlers::extraction::GoalExtractor;
use crate::application::handlers::routing::RouteMessageHandler;
use crate::domain::conversation::tools::ToolRegistry;
use crate::domain::conversation::{
    after_tools, last_user_turn, previous_user_turn, ChatRole, ChatTurn, ModelTier,
    PendingRequest, PersonaTable, GENERIC_REPLY, TROUBLE_REPLY,
};
use crate::domain::extraction::GoalDetails;
use crate::domain::foundation::UserId;
use crate::domain::wellness::{DomainLabel, UserContext, WellnessCategory};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, Message, RequestMetadata, RequestPurpose,
    ToolExecutor,
};

use super::tool_dispatch::dispatch_tool;

/// Chat models, one per tier.
#[derive(Clone)]
pub struct ChatModels {
    pub standard: Arc<dyn AIProvider>,
    pub cost_optimized: Arc<dyn AIProvider>,
    pub lightweight: Arc<dyn AIProvider>,
}

impl ChatModels {
    /// Uses the same provider for every tier.
    pub fn single(provider: Arc<dyn AIProvider>) -> Self {
        Self {
            standard: provider.clone(),
            cost_optimized: provider.clone(),
            lightweight: provider,
        }
    }

    pub fn for_tier(&self, tier: ModelTier) -> &Arc<dyn AIProvider> {
        match tier {
            ModelTier::Standard => &self.standard,
            ModelTier::CostOptimized => &self.cost_optimized,
            ModelTier::Lightweight => &self.lightweight,
        }
    }
}

/// Immutable configuration the orchestrator is built with.
#[derive(Clone)]
pub struct OrchestratorConfig {
    pub personas: PersonaTable,
    pub models: ChatModels,
    pub tools: ToolRegistry,
}

/// Where a turn ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStage {
    Routing,
    AwaitingClarification,
    Generating,
    ToolDispatch,
    Done,
}

/// Command for one incoming turn.
#[derive(Debug, Clone, Default)]
pub struct GenerateReplyCommand {
    /// Domain chosen by the caller, skipping the router.
    pub domain_hint: Option<DomainLabel>,
    /// Sanitized history, latest user message last.
    pub history: Vec<ChatTurn>,
    /// Context for the system message. `None` for anonymous callers.
    pub user_context: Option<UserContext>,
    pub user_id: Option<UserId>,
    /// Clarification token from the previous reply.
    pub pending: Option<PendingRequest>,
}

impl GenerateReplyCommand {
    pub fn new(history: Vec<ChatTurn>) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    pub fn with_domain_hint(mut self, domain: Option<DomainLabel>) -> Self {
        self.domain_hint = domain;
        self
    }

    pub fn with_user_context(mut self, context: Option<UserContext>) -> Self {
        self.user_context = context;
        self
    }

    pub fn with_user_id(mut self, user_id: Option<UserId>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn with_pending(mut self, pending: Option<PendingRequest>) -> Self {
        self.pending = pending;
        self
    }
}

/// Result of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReplyResult {
    pub reply: String,
    pub domain: DomainLabel,
    /// Set when `reply` is a clarification question.
    pub pending: Option<PendingRequest>,
    pub stage: ReplyStage,
}

impl GenerateReplyResult {
    fn done(reply: impl Into<String>, domain: DomainLabel) -> Self {
        Self {
            reply: reply.into(),
            domain,
            pending: None,
            stage: ReplyStage::Done,
        }
    }

    fn clarify(question: String, pending: PendingRequest) -> Self {
        Self {
            reply: question,
            domain: pending.domain,
            pending: Some(pending),
            stage: ReplyStage::AwaitingClarification,
        }
    }
}

/// What the clarification step decided.
enum Clarification {
    Ask(GenerateReplyResult),
    /// Go ahead; optionally with goal details for the system message.
    Proceed(Option<GoalDetails>),
}

/// The conversation orchestrator.
#[derive(Clone)]
pub struct GenerateReplyHandler {
    config: Arc<OrchestratorConfig>,
    router: RouteMessageHandler,
    goal_extractor: GoalExtractor,
    tools: Arc<dyn ToolExecutor>,
}

impl GenerateReplyHandler {
    pub fn new(
        config: OrchestratorConfig,
        router: RouteMessageHandler,
        goal_extractor: GoalExtractor,
        tools: Arc<dyn ToolExecutor>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            router,
            goal_extractor,
            tools,
        }
    }

    pub async fn handle(&self, cmd: GenerateReplyCommand) -> GenerateReplyResult {
        let domain = self.resolve_domain(&cmd).await;
        tracing::debug!(domain = %domain, stage = ?ReplyStage::Routing, "domain resolved");

        let goal_details = match self.clarify(&cmd, domain).await {
            Ok(Clarification::Ask(result)) => {
                tracing::info!(domain = %domain, "asking for missing goal fields");
                return result;
            }
            Ok(Clarification::Proceed(details)) => details,
            Err(err) => {
                tracing::warn!(error = %err, "goal extraction failed");
                return GenerateReplyResult::done(TROUBLE_REPLY, domain);
            }
        };

        match self.generate(&cmd, domain, goal_details.as_ref()).await {
            Ok(reply) => GenerateReplyResult::done(reply, domain),
            Err(err) => {
                tracing::warn!(domain = %domain, error = %err, "model call failed");
                GenerateReplyResult::done(TROUBLE_REPLY, domain)
            }
        }
    }

    async fn resolve_domain(&self, cmd: &GenerateReplyCommand) -> DomainLabel {
        if let Some(hint) = cmd.domain_hint {
            return hint;
        }
        if let Some(pending) = &cmd.pending {
            return pending.domain;
        }
        match last_user_turn(&cmd.history) {
            Some(turn) => self.router.handle(&turn.content, cmd.user_id.as_ref()).await,
            None => DomainLabel::Main,
        }
    }

    async fn clarify(
        &self,
        cmd: &GenerateReplyCommand,
        domain: DomainLabel,
    ) -> Result<Clarification, AIError> {
        let latest = last_user_turn(&cmd.history);

        if let Some(pending) = &cmd.pending {
            // The token comes back from the client, so limits are re-applied.
            let mut pending = PendingRequest::new(domain, pending.goal.clone());
            if let Some(answer) = latest {
                pending.merge_answer(&answer.content);
            }
            let pending = PendingRequest::new(domain, pending.goal.sanitized());
            return Ok(match pending.question() {
                Some(question) => Clarification::Ask(GenerateReplyResult::clarify(question, pending)),
                None => Clarification::Proceed(Some(pending.goal)),
            });
        }

        if !domain.is_clarify_capable() {
            return Ok(Clarification::Proceed(None));
        }
        let Some(latest) = latest else {
            return Ok(Clarification::Proceed(None));
        };

        let user_id = cmd.user_id.as_ref();
        let details = match (
            WellnessCategory::from_token(&latest.content),
            previous_user_turn(&cmd.history),
        ) {
            (Some(category), Some(previous)) => {
                let mut details = self.goal_extractor.extract(&previous.content, user_id).await?;
                details.set_category(category);
                details
            }
            _ => self.goal_extractor.extract(&latest.content, user_id).await?,
        };

        Ok(match details.clarification_question() {
            Some(question) => Clarification::Ask(GenerateReplyResult::clarify(
                question,
                PendingRequest::new(domain, details),
            )),
            None => Clarification::Proceed(None),
        })
    }

    async fn generate(
        &self,
        cmd: &GenerateReplyCommand,
        domain: DomainLabel,
        goal_details: Option<&GoalDetails>,
    ) -> Result<String, AIError> {
        let persona = self.config.personas.select(domain);
        let provider = self.config.models.for_tier(persona.tier);

        let mut system = match &cmd.user_context {
            Some(context) => format!("{}\n{}", context.format(), persona.system_prompt),
            None => persona.system_prompt.clone(),
        };
        if let Some(details) = goal_details {
            system.push_str("\n\n");
            system.push_str(&details.summary_for_model());
        }

        let mut messages = Vec::with_capacity(cmd.history.len() + 1);
        messages.push(Message::system(system));
        messages.extend(cmd.history.iter().map(|turn| match turn.role {
            ChatRole::User => Message::user(turn.content.clone()),
            ChatRole::Assistant => Message::assistant(turn.content.clone()),
        }));

        let metadata = || {
            RequestMetadata::new(RequestPurpose::Chat(domain)).with_user(cmd.user_id.clone())
        };
        let tools = self.config.tools.definitions().to_vec();

        tracing::debug!(domain = %domain, tier = ?persona.tier, stage = ?ReplyStage::Generating, "calling chat model");
        let response = provider
            .complete(
                CompletionRequest::new(metadata())
                    .with_messages(messages.clone())
                    .with_tools(tools.clone()),
            )
            .await?;

        if !response.has_tool_calls() {
            let text = response.content.trim();
            return Ok(if text.is_empty() {
                GENERIC_REPLY.to_string()
            } else {
                response.content
            });
        }

        tracing::debug!(count = response.tool_calls.len(), stage = ?ReplyStage::ToolDispatch, "dispatching tools");
        messages.push(Message::assistant_tool_calls(
            response.content.clone(),
            response.tool_calls.clone(),
        ));

        let mut any_failed = false;
        for call in &response.tool_calls {
            let result = dispatch_tool(self.tools.as_ref(), call, cmd.user_id.as_ref()).await;
            any_failed |= !result.is_success();
            messages.push(Message::tool_result(call.id(), result.to_payload().to_string()));
        }

        let follow_up = provider
            .complete(
                CompletionRequest::new(metadata())
                    .with_messages(messages)
                    .with_tools(tools),
            )
            .await?;

        Ok(if follow_up.content.trim().is_empty() {
            after_tools(any_failed).to_string()
        } else {
            follow_up.content
        })
    }
}
