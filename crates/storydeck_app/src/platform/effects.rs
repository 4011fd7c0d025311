use deck_logging::deck_warn;
use storydeck_core::{Effect, FetchOutcome, Msg, StoriesPage, Story};
use storydeck_engine::{EngineEvent, EngineHandle, SearchHit, SearchSettings};

use super::persistence::{PreferenceStore, SEARCH_TERM_KEY};

/// Executes core effects and feeds engine completions back as messages.
pub struct EffectRunner<P: PreferenceStore> {
    engine: EngineHandle,
    prefs: P,
}

impl<P: PreferenceStore> EffectRunner<P> {
    pub fn new(prefs: P) -> Self {
        Self {
            engine: EngineHandle::new(SearchSettings::default()),
            prefs,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchStories { generation, url } => {
                    self.engine.search(generation, url);
                }
                Effect::PersistSearchTerm(term) => {
                    self.prefs.set(SEARCH_TERM_KEY, &term);
                }
            }
        }
    }

    /// Drains pending engine completions into messages for the update loop.
    /// Structured failure detail stops here; the core only sees success or
    /// failure.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::SearchCompleted { generation, result } => {
                    let outcome = match result {
                        Ok(results) => FetchOutcome::Success(StoriesPage {
                            list: results.hits.into_iter().map(map_hit).collect(),
                            page: results.page,
                        }),
                        Err(err) => {
                            deck_warn!("search generation={} failed: {}", generation, err);
                            FetchOutcome::Failure
                        }
                    };
                    msgs.push(Msg::FetchCompleted {
                        generation,
                        outcome,
                    });
                }
            }
        }
        msgs
    }
}

fn map_hit(hit: SearchHit) -> Story {
    Story {
        id: hit.id,
        url: hit.url,
        title: hit.title,
        author: hit.author,
        num_comments: hit.num_comments,
        points: hit.points,
    }
}
