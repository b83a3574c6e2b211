//! RetrievalEngine: the single entry point for knowledge base retrieval.
//!
//! fetch → index → expand → threshold search → excerpt → assemble.
//! Every public call returns a valid value. Infrastructure faults are
//! logged with the failing step and degrade to the empty outcome.

use tracing::{debug, error, info, Instrument};

use kbase_core::config::{ExpansionConfig, KbaseConfig, RankerKind, RetrievalConfig};
use kbase_core::models::{AugmentedPrompt, KnowledgeSearchResponse, RetrievalContext};
use kbase_core::traits::{IDocumentStore, IEmbeddingProvider, ISettingsStore};
use kbase_core::{KbaseError, KbaseResult, RetrievalSettings};
use kbase_observability::retrieval_span;

use crate::corpus::Corpus;
use crate::excerpt::extract_excerpts;
use crate::expansion::QueryExpander;
use crate::generation::{
    build_augmented_prompt, knowledge_search_response, ContextAssembler, ExcerptedResult,
};
use crate::ranking::{LexicalRanker, SemanticRanker};
use crate::search::{SearchOutcome, ThresholdSearch};

/// How a message is matched against the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetrievalMode {
    /// Query expansion with threshold relaxation.
    #[default]
    Advanced,
    /// The raw query at a single threshold.
    Basic,
}

/// Per-call parameters resolved from the settings snapshot and overrides.
struct Plan {
    queries: Vec<String>,
    thresholds: Vec<f64>,
    max_results: usize,
    max_excerpts: usize,
}

struct Failure {
    step: &'static str,
    error: KbaseError,
}

impl Failure {
    fn at(step: &'static str) -> impl FnOnce(KbaseError) -> Failure {
        move |error| Failure { step, error }
    }
}

pub struct RetrievalEngine<'a, S, E, C> {
    store: &'a S,
    embedder: &'a E,
    settings: &'a C,
    config: RetrievalConfig,
    expander: QueryExpander,
    search: ThresholdSearch,
    assembler: ContextAssembler,
}

impl<'a, S, E, C> RetrievalEngine<'a, S, E, C>
where
    S: IDocumentStore,
    E: IEmbeddingProvider,
    C: ISettingsStore,
{
    pub fn new(
        store: &'a S,
        embedder: &'a E,
        settings: &'a C,
        config: RetrievalConfig,
        expansion: ExpansionConfig,
    ) -> Self {
        Self {
            store,
            embedder,
            settings,
            search: ThresholdSearch::new(&config),
            assembler: ContextAssembler::new(config.summary_max_chars),
            expander: QueryExpander::new(expansion),
            config,
        }
    }

    pub fn from_config(
        store: &'a S,
        embedder: &'a E,
        settings: &'a C,
        config: &KbaseConfig,
    ) -> Self {
        Self::new(
            store,
            embedder,
            settings,
            config.retrieval.clone(),
            config.expansion.clone(),
        )
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Expanded, threshold-relaxed retrieval.
    ///
    /// `threshold` and `max_results` override the live settings for this
    /// call only.
    pub async fn retrieve(
        &self,
        query: &str,
        owner_id: &str,
        threshold: Option<f64>,
        max_results: Option<usize>,
    ) -> RetrievalContext {
        self.run(query, owner_id, RetrievalMode::Advanced, threshold, max_results)
            .await
    }

    /// Single-pass retrieval: no expansion, one threshold.
    pub async fn retrieve_basic(
        &self,
        query: &str,
        owner_id: &str,
        threshold: Option<f64>,
        max_results: Option<usize>,
    ) -> RetrievalContext {
        self.run(query, owner_id, RetrievalMode::Basic, threshold, max_results)
            .await
    }

    /// Retrieve for `query` and augment `base_prompt` with the result.
    pub async fn process_message(
        &self,
        base_prompt: &str,
        query: &str,
        owner_id: &str,
        mode: RetrievalMode,
    ) -> AugmentedPrompt {
        let context = self.run(query, owner_id, mode, None, None).await;
        AugmentedPrompt {
            prompt: build_augmented_prompt(base_prompt, &context, query),
            context,
        }
    }

    /// Tool-facing search over the owner's knowledge base. Runs at the
    /// configured tool threshold and limit, not the live settings.
    pub async fn search_knowledge(&self, query: &str, owner_id: &str) -> KnowledgeSearchResponse {
        let context = self
            .retrieve(
                query,
                owner_id,
                Some(self.config.tool_threshold),
                Some(self.config.tool_max_results),
            )
            .await;
        knowledge_search_response(&context)
    }

    async fn run(
        &self,
        query: &str,
        owner_id: &str,
        mode: RetrievalMode,
        threshold: Option<f64>,
        max_results: Option<usize>,
    ) -> RetrievalContext {
        let span = retrieval_span!(query, owner_id);
        async {
            let settings = self.settings.get_settings();
            match self
                .try_run(query, owner_id, mode, &settings, threshold, max_results)
                .await
            {
                Ok(context) => context,
                Err(Failure { step, error }) => {
                    error!(
                        query,
                        owner = owner_id,
                        step,
                        subsystem = error.subsystem(),
                        error = %error,
                        "retrieval failed"
                    );
                    RetrievalContext::failed()
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn try_run(
        &self,
        query: &str,
        owner_id: &str,
        mode: RetrievalMode,
        settings: &RetrievalSettings,
        threshold: Option<f64>,
        max_results: Option<usize>,
    ) -> Result<RetrievalContext, Failure> {
        let documents = self
            .store
            .list_active_documents(owner_id)
            .await
            .map_err(Failure::at("fetch"))?;
        if documents.is_empty() {
            info!("no active documents");
            return Ok(RetrievalContext::no_results());
        }

        let corpus = Corpus::build(documents, self.config.ranker == RankerKind::Semantic);
        let plan = self.plan(query, mode, settings, threshold, max_results);
        debug!(
            documents = corpus.len(),
            skipped_vectors = corpus.skipped_vectors(),
            queries = plan.queries.len(),
            thresholds = ?plan.thresholds,
            "corpus indexed"
        );

        let outcome = self
            .rank(&plan, &corpus)
            .await
            .map_err(Failure::at("search"))?;
        if outcome.results.is_empty() {
            info!(failed_queries = outcome.failed_queries, "no results above any threshold");
            return Ok(RetrievalContext::no_results());
        }

        let excerpted = outcome
            .results
            .into_iter()
            .map(|result| ExcerptedResult {
                excerpts: extract_excerpts(&result.body, query, plan.max_excerpts),
                result,
            })
            .collect();
        let context: RetrievalContext = self.assembler.assemble(excerpted, query).into();

        info!(
            sources = context.total_sources,
            average_similarity = context.average_similarity,
            threshold = outcome.threshold,
            failed_queries = outcome.failed_queries,
            "retrieval complete"
        );
        Ok(context)
    }

    fn plan(
        &self,
        query: &str,
        mode: RetrievalMode,
        settings: &RetrievalSettings,
        threshold: Option<f64>,
        max_results: Option<usize>,
    ) -> Plan {
        let max_excerpts = settings.max_excerpts.min(self.config.excerpt_ceiling);
        match mode {
            RetrievalMode::Advanced => Plan {
                queries: self.expander.expand(query),
                thresholds: self.search.ladder(
                    threshold.unwrap_or(settings.threshold),
                    settings.min_threshold,
                ),
                max_results: max_results.unwrap_or(settings.max_results),
                max_excerpts,
            },
            RetrievalMode::Basic => Plan {
                queries: vec![query.to_string()],
                thresholds: vec![threshold.unwrap_or(self.config.basic_threshold)],
                max_results: max_results.unwrap_or(self.config.basic_max_results),
                max_excerpts,
            },
        }
    }

    async fn rank(&self, plan: &Plan, corpus: &Corpus) -> KbaseResult<SearchOutcome> {
        match self.config.ranker {
            RankerKind::Lexical => {
                self.search
                    .search_at(
                        &LexicalRanker::new(),
                        &plan.queries,
                        corpus,
                        plan.max_results,
                        &plan.thresholds,
                    )
                    .await
            }
            RankerKind::Semantic => {
                self.search
                    .search_at(
                        &SemanticRanker::new(self.embedder),
                        &plan.queries,
                        corpus,
                        plan.max_results,
                        &plan.thresholds,
                    )
                    .await
            }
        }
    }
}
