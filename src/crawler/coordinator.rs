//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the level-synchronous traversal that ties the
//! components together:
//! - Draining the current frontier level one URL at a time
//! - Fetching, extracting text and evaluating the content policy
//! - Persisting accepted pages
//! - Collecting links for the next level
//! - Pacing between requests and stopping at the page budget

use crate::config::{Config, CrawlerConfig};
use crate::crawler::fetcher::{FetchResult, HttpFetcher, PageFetcher};
use crate::crawler::pacing::{pace, FixedDelay, PacingPolicy};
use crate::crawler::parser::extract_links;
use crate::crawler::text::extract_text;
use crate::output::CrawlReport;
use crate::policy::{ContentPolicy, CyrillicWordPolicy};
use crate::state::{CrawlPhase, CrawlState, PageOutcome};
use crate::storage::{open_store, PageStore};
use crate::url::strip_fragment;
use crate::CrawlerError;
use chrono::Utc;
use std::path::Path;

/// Main crawler coordinator structure
///
/// A coordinator runs exactly one crawl. Calling [`Coordinator::run`] a second
/// time fails with [`CrawlerError::InvalidTransition`].
pub struct Coordinator {
    settings: CrawlerConfig,
    fetcher: Box<dyn PageFetcher>,
    policy: Box<dyn ContentPolicy>,
    store: Box<dyn PageStore>,
    pacing: Box<dyn PacingPolicy>,
    phase: CrawlPhase,
}

impl Coordinator {
    /// Creates a coordinator wired to HTTP, the file store and a fixed delay
    ///
    /// The index file is truncated here, so a failure to prepare the output
    /// aborts before anything is fetched.
    ///
    /// # Arguments
    ///
    /// * `config` - A validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Ready to run
    /// * `Err(CrawlerError)` - The output locations or HTTP client could not be set up
    pub fn new(config: &Config) -> Result<Self, CrawlerError> {
        let store = open_store(
            Path::new(&config.output.index_path),
            Path::new(&config.output.pages_dir),
        )?;
        let fetcher = HttpFetcher::new(&config.fetcher)?;

        Ok(Self::with_components(
            config.crawler.clone(),
            Box::new(fetcher),
            Box::new(CyrillicWordPolicy::new(config.crawler.min_words)),
            Box::new(store),
            Box::new(FixedDelay::new(config.crawler.delay())),
        ))
    }

    /// Creates a coordinator from explicit components
    pub fn with_components(
        settings: CrawlerConfig,
        fetcher: Box<dyn PageFetcher>,
        policy: Box<dyn ContentPolicy>,
        store: Box<dyn PageStore>,
        pacing: Box<dyn PacingPolicy>,
    ) -> Self {
        Self {
            settings,
            fetcher,
            policy,
            store,
            pacing,
            phase: CrawlPhase::Idle,
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    /// Runs the crawl to completion
    ///
    /// Levels are processed until the page budget is met or no unvisited URL
    /// remains. Both are normal completion.
    pub async fn run(&mut self) -> Result<CrawlReport, CrawlerError> {
        self.transition(CrawlPhase::Running)?;

        let started_at = Utc::now();
        let target = self.settings.target_pages;
        let mut state = CrawlState::from_seeds(&self.settings.seeds);

        tracing::info!(
            "Starting crawl: {} seed URLs, target {} pages, policy: {}",
            state.current_len(),
            target,
            self.policy.describe()
        );

        while !state.budget_met(target) && state.has_pending() {
            tracing::info!(
                "Level {}: {} URLs to visit",
                state.levels_completed() + 1,
                state.current_len()
            );

            self.process_level(&mut state).await;

            if state.budget_met(target) {
                break;
            }

            tracing::debug!("{} links collected for the next level", state.next_len());
            state.advance_level();
            tracing::info!(
                "Level {} done: {} pages saved, {} URLs queued",
                state.levels_completed(),
                self.store.pages_stored(),
                state.current_len()
            );
        }

        self.transition(CrawlPhase::Done)?;

        let report = CrawlReport::from_state(&state, target, started_at, Utc::now());
        if report.budget_met() {
            tracing::info!("Page target reached: {} pages saved", report.pages_accepted);
        } else {
            tracing::info!(
                "Frontier exhausted: {} of {} pages saved",
                report.pages_accepted,
                target
            );
        }

        Ok(report)
    }

    fn transition(&mut self, to: CrawlPhase) -> Result<(), CrawlerError> {
        if !self.phase.can_transition_to(to) {
            return Err(CrawlerError::InvalidTransition {
                from: self.phase,
                to,
            });
        }
        self.phase = to;
        Ok(())
    }

    /// Drains the current level in iteration order, one URL at a time
    async fn process_level(&mut self, state: &mut CrawlState) {
        let target = self.settings.target_pages;

        for url in state.take_level() {
            if state.budget_met(target) {
                tracing::debug!("Page target reached, leaving level early");
                break;
            }

            let outcome = self.process_url(state, &url).await;
            tracing::trace!("{} -> {}", url, outcome);
            state.record(&outcome);

            if outcome != PageOutcome::Skipped {
                pace(self.pacing.as_ref(), &url).await;
            }
        }
    }

    /// Processes a single URL
    ///
    /// This method:
    /// 1. Marks the URL visited (or skips it)
    /// 2. Fetches the page
    /// 3. Extracts visible text and evaluates the content policy
    /// 4. Persists accepted pages
    /// 5. Queues the page's links for the next level
    async fn process_url(&mut self, state: &mut CrawlState, url: &str) -> PageOutcome {
        if !state.mark_visited(url) {
            return PageOutcome::Skipped;
        }

        let (final_url, body) = match self.fetcher.fetch(url).await {
            FetchResult::Success {
                final_url, body, ..
            } => (final_url, body),
            failure => {
                let reason = failure
                    .failure_reason()
                    .unwrap_or_else(|| "unknown error".to_string());
                tracing::warn!("Failed to download {}: {}", url, reason);
                return PageOutcome::FetchFailed { reason };
            }
        };
        tracing::debug!("Downloaded {}", url);

        // a redirect target counts as visited too
        let final_url = strip_fragment(&final_url).to_string();
        if final_url != url {
            state.mark_visited(&final_url);
        }

        let outcome = self.evaluate_page(url, &body);
        if outcome.is_downloaded() {
            let links = extract_links(&body, &final_url);
            tracing::debug!("Found {} links on {}", links.len(), url);
            state.enqueue(links);
        }

        outcome
    }

    /// Applies text extraction, the content policy and the page store
    fn evaluate_page(&mut self, url: &str, body: &str) -> PageOutcome {
        let text = extract_text(body);
        if text.is_empty() {
            tracing::debug!("No visible text on {}", url);
            return PageOutcome::Empty;
        }

        let verdict = self.policy.evaluate(&text);
        if !verdict.accepted {
            tracing::info!(
                "Rejected {}: only {} Cyrillic words",
                url,
                verdict.word_count
            );
            PageOutcome::Rejected {
                word_count: verdict.word_count,
            }
        } else {
            match self.store.store(url, &text) {
                Ok(record_id) => {
                    tracing::info!(
                        "Saved page {} ({} Cyrillic words): {}",
                        record_id,
                        verdict.word_count,
                        url
                    );
                    PageOutcome::Accepted {
                        record_id,
                        word_count: verdict.word_count,
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to save {}: {}", url, e);
                    PageOutcome::StoreFailed {
                        word_count: verdict.word_count,
                        error: e.to_string(),
                    }
                }
            }
        }
    }
}

/// Runs a complete crawl with the default components
///
/// # Arguments
///
/// * `config` - A validated configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed
/// * `Err(CrawlerError)` - Crawl could not be started
pub async fn run_crawl(config: &Config) -> Result<CrawlReport, CrawlerError> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
