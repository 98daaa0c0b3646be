use async_trait::async_trait;
use sim_core::{EntityId, Tick};

/// Optional async collaborator routing a natural-language (or otherwise
/// expensive) query out to the embedder and back. The core never
/// inspects the returned string — it only hands it back to whichever
/// System asked for it.
///
/// `?Send`: the tick loop runs on a single-threaded executor, so
/// implementations are free to use `Rc`/`RefCell` internally without
/// fighting `Send` bounds.
#[async_trait(?Send)]
pub trait CognitiveScaffold {
    async fn query(&self, entity_id: &EntityId, purpose: &str, prompt: &str, current_tick: Tick) -> String;
}
