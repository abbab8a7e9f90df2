//! Mood Journal - Pipeline orchestrator
//!
//! Owns the entry store, the summary store, the ephemeral insight set and
//! the in-flight flags; nothing mutates pipeline state except through this
//! object. Submission classifies through the gateway, appends, then kicks
//! off background enrichment and trigger evaluation. Gateway failures in
//! the background paths are logged and leave prior state unchanged.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Local, Utc};
use tokio::sync::Mutex;

use crate::domain::aggregate;
use crate::domain::entities::{MoodEntry, PatternInsight, WeeklySummary};
use crate::domain::errors::PipelineError;
use crate::domain::value_objects::{InputMethod, Mood, Trend};
use crate::domain::week;
use crate::pipeline::entry_store::{EntryPatch, EntryStore};
use crate::pipeline::summary_store::SummaryStore;
use crate::ports::classifier::{MoodClassifier, PatternContext, PatternEntry, SummaryContext};
use crate::ports::state_store::{PersistedRecord, StateStore};

/// Persistent record name for the entry history
pub const HISTORY_KEY: &str = "mood-journal-history";
/// Persistent record name for the weekly summaries
pub const SUMMARIES_KEY: &str = "mood-journal-summaries";

/// Tunables for the journal pipeline
#[derive(Debug, Clone)]
pub struct JournalConfig {
    /// Offset used to place week boundaries (Sunday local midnight)
    pub timezone: FixedOffset,
    /// Entries considered by the rolling trend
    pub trend_window: usize,
    /// Minimum entries, total and in-window, for a weekly summary
    pub min_entries_for_summary: usize,
    /// Minimum total entries before pattern insights are requested
    pub min_entries_for_patterns: usize,
    /// Most recent entries handed to the pattern call
    pub pattern_entry_limit: usize,
    /// Per-entry character cap for pattern context text
    pub pattern_text_limit: usize,
    /// Entries sampled into the summary context
    pub sample_limit: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            timezone: *Local::now().offset(),
            trend_window: aggregate::TREND_WINDOW,
            min_entries_for_summary: 3,
            min_entries_for_patterns: 5,
            pattern_entry_limit: 20,
            pattern_text_limit: 100,
            sample_limit: 5,
        }
    }
}

/// RAII single-flight guard; the flag clears when the guard drops
struct Flight<'a>(&'a AtomicBool);

impl<'a> Flight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Flight(flag))
    }
}

impl Drop for Flight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// The mood journal pipeline.
///
/// Constructed once per process via [`MoodJournal::load`] and shared as
/// an `Arc` with the presentation layer.
pub struct MoodJournal {
    classifier: Arc<dyn MoodClassifier>,
    store: Arc<dyn StateStore>,
    entries: Mutex<EntryStore>,
    summaries: Mutex<SummaryStore>,
    insights: Mutex<Vec<PatternInsight>>,
    summary_in_flight: AtomicBool,
    insight_in_flight: AtomicBool,
    config: JournalConfig,
}

impl MoodJournal {
    /// Hydrate the journal from persisted state
    pub async fn load(
        classifier: Arc<dyn MoodClassifier>,
        store: Arc<dyn StateStore>,
        config: JournalConfig,
    ) -> Result<Arc<Self>, PipelineError> {
        let entries = match store.get(HISTORY_KEY).await? {
            Some(value) => {
                PersistedRecord::<EntryStore>::decode(HISTORY_KEY, value).unwrap_or_default()
            }
            None => EntryStore::default(),
        };
        let summaries = match store.get(SUMMARIES_KEY).await? {
            Some(value) => {
                PersistedRecord::<SummaryStore>::decode(SUMMARIES_KEY, value).unwrap_or_default()
            }
            None => SummaryStore::default(),
        };

        tracing::info!(
            "📓 Journal loaded: {} entries, {} summaries ({} classifier)",
            entries.len(),
            summaries.len(),
            classifier.provider_name()
        );

        Ok(Arc::new(Self {
            classifier,
            store,
            entries: Mutex::new(entries),
            summaries: Mutex::new(summaries),
            insights: Mutex::new(Vec::new()),
            summary_in_flight: AtomicBool::new(false),
            insight_in_flight: AtomicBool::new(false),
            config,
        }))
    }

    /// Submit free text for classification and record the result.
    ///
    /// Empty text is rejected before any gateway call. A classification
    /// failure propagates and leaves no partial entry. On success the
    /// entry is visible immediately; supportive content arrives later
    /// through a background task keyed by the entry id.
    pub async fn submit(
        self: &Arc<Self>,
        text: &str,
        input_method: InputMethod,
    ) -> Result<MoodEntry, PipelineError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PipelineError::Validation(
                "entry text cannot be empty".to_string(),
            ));
        }

        let classification = self.classifier.classify(text).await?;
        let entry = MoodEntry::new(
            text.to_string(),
            classification.mood,
            classification.confidence,
            input_method,
        );

        {
            let mut entries = self.entries.lock().await;
            entries.append(entry.clone());
            self.persist_entries(&entries).await?;
        }

        tracing::info!(
            "📝 Entry {} classified as {} ({:.0}%)",
            entry.id,
            entry.mood,
            entry.confidence
        );

        // Best-effort enrichment: entry is visible before content arrives
        let journal = Arc::clone(self);
        let (id, mood, entry_text) = (entry.id.clone(), entry.mood, entry.text.clone());
        tokio::spawn(async move {
            if let Err(e) = journal.attach_content(&id, mood, &entry_text).await {
                tracing::warn!("Supportive content for entry {} failed: {}", id, e);
            }
        });

        // Both scheduler triggers run after every store mutation
        let journal = Arc::clone(self);
        tokio::spawn(async move {
            journal.evaluate_triggers().await;
        });

        Ok(entry)
    }

    /// Request supportive content and patch it onto the entry. Patch is
    /// id-keyed, so out-of-order completion across entries is safe; a
    /// missing id (already evicted) is a no-op.
    async fn attach_content(&self, id: &str, mood: Mood, text: &str) -> Result<(), PipelineError> {
        let content = self.classifier.elaborate(mood, text).await?;
        let mut entries = self.entries.lock().await;
        if entries.patch(
            id,
            EntryPatch {
                content: Some(content),
            },
        ) {
            self.persist_entries(&entries).await?;
        }
        Ok(())
    }

    /// Run both triggers, logging failures instead of propagating them
    pub async fn evaluate_triggers(&self) {
        if let Err(e) = self.check_weekly_summary().await {
            tracing::warn!("Weekly summary generation failed: {}", e);
        }
        if let Err(e) = self.refresh_pattern_insights().await {
            tracing::warn!("Pattern insight generation failed: {}", e);
        }
    }

    /// Evaluate the weekly-summary trigger against the current clock
    pub async fn check_weekly_summary(&self) -> Result<Option<WeeklySummary>, PipelineError> {
        self.check_weekly_summary_at(Utc::now()).await
    }

    /// Evaluate the weekly-summary trigger at an explicit instant.
    ///
    /// Generates a summary for the week preceding the current one when
    /// enough entries exist, at least 3 fall inside that week, and the
    /// latest stored summary is more than a week older than the current
    /// week start. The elapsed check deliberately compares against the
    /// current week, not the target week, matching the long-standing
    /// observable behavior.
    pub async fn check_weekly_summary_at(
        &self,
        now: DateTime<Utc>,
    ) -> Result<Option<WeeklySummary>, PipelineError> {
        let Some(_guard) = Flight::acquire(&self.summary_in_flight) else {
            tracing::debug!("Weekly summary already in flight, dropping trigger");
            return Ok(None);
        };

        let target_start = week::target_week_start(now, self.config.timezone);
        let current_start = target_start + week::week_length();

        // Snapshot under lock; the gateway call happens lock-free
        let window = {
            let entries = self.entries.lock().await;
            if entries.len() < self.config.min_entries_for_summary {
                return Ok(None);
            }
            let due = {
                let summaries = self.summaries.lock().await;
                match summaries.latest() {
                    None => true,
                    Some(latest) => current_start - latest.week_start > week::week_length(),
                }
            };
            if !due {
                return Ok(None);
            }
            entries
                .list()
                .iter()
                .filter(|e| e.timestamp >= target_start && e.timestamp < current_start)
                .cloned()
                .collect::<Vec<_>>()
        };

        if window.len() < self.config.min_entries_for_summary {
            return Ok(None);
        }

        let distribution = aggregate::frequency_of(&window);
        let (Some(dominant), Some(average)) = (
            aggregate::dominant_mood(&distribution),
            aggregate::average_confidence(&window),
        ) else {
            return Ok(None);
        };

        let context = SummaryContext {
            week_start: target_start,
            week_end: current_start,
            entry_count: window.len(),
            dominant_mood: dominant,
            distribution: distribution.clone(),
            average_confidence: average,
            sample: window
                .iter()
                .take(self.config.sample_limit)
                .cloned()
                .collect(),
        };
        let narrative = self.classifier.summarize(&context).await?;

        let summary = WeeklySummary {
            week_start: target_start,
            week_end: current_start,
            entries: window,
            dominant_mood: dominant,
            mood_distribution: distribution,
            average_confidence: average,
            insights: narrative.insights,
            recommendations: narrative.recommendations,
        };

        {
            let mut summaries = self.summaries.lock().await;
            summaries.insert(summary.clone())?;
            self.persist_summaries(&summaries).await?;
        }

        tracing::info!(
            "📆 Weekly summary generated for week starting {}",
            summary.week_start
        );
        Ok(Some(summary))
    }

    /// Regenerate the pattern-insight set, replacing it wholesale.
    ///
    /// Single-flight: a trigger while a request is outstanding is dropped,
    /// not queued. A malformed response empties the set; a transport
    /// failure leaves the previous set untouched. Returns whether a new
    /// set was installed.
    pub async fn refresh_pattern_insights(&self) -> Result<bool, PipelineError> {
        let Some(_guard) = Flight::acquire(&self.insight_in_flight) else {
            tracing::debug!("Pattern insight request already in flight, dropping trigger");
            return Ok(false);
        };

        let context = {
            let entries = self.entries.lock().await;
            if entries.len() < self.config.min_entries_for_patterns {
                return Ok(false);
            }
            // The distribution covers exactly the entries handed over,
            // not the whole store
            let window = &entries.list()[..entries.len().min(self.config.pattern_entry_limit)];
            let recent = window
                .iter()
                .map(|e| PatternEntry {
                    timestamp: e.timestamp,
                    mood: e.mood,
                    text: e.text.chars().take(self.config.pattern_text_limit).collect(),
                })
                .collect();
            PatternContext {
                recent,
                distribution: aggregate::frequency_of(window),
            }
        };

        match self.classifier.patterns(&context).await {
            Ok(insights) => {
                tracing::info!("🔍 {} pattern insights generated", insights.len());
                *self.insights.lock().await = insights;
                Ok(true)
            }
            Err(e) if e.is_malformed_response() => {
                tracing::warn!("Discarding malformed pattern response: {}", e);
                self.insights.lock().await.clear();
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Retained entries, newest first
    pub async fn history(&self) -> Vec<MoodEntry> {
        self.entries.lock().await.list().to_vec()
    }

    /// Rolling trend over the configured window of recent entries
    pub async fn current_trend(&self) -> Trend {
        aggregate::trend(self.entries.lock().await.list(), self.config.trend_window)
    }

    /// Current pattern-insight set (possibly empty)
    pub async fn insights(&self) -> Vec<PatternInsight> {
        self.insights.lock().await.clone()
    }

    /// Retained weekly summaries, newest first
    pub async fn summaries(&self) -> Vec<WeeklySummary> {
        self.summaries.lock().await.list().to_vec()
    }

    /// Name of the classifier backing this journal
    pub fn provider_name(&self) -> &str {
        self.classifier.provider_name()
    }

    async fn persist_entries(&self, entries: &EntryStore) -> Result<(), PipelineError> {
        let value = PersistedRecord::new(entries.clone()).encode()?;
        self.store.put(HISTORY_KEY, value).await
    }

    async fn persist_summaries(&self, summaries: &SummaryStore) -> Result<(), PipelineError> {
        let value = PersistedRecord::new(summaries.clone()).encode()?;
        self.store.put(SUMMARIES_KEY, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::classifier::{Classification, SummaryNarrative};
    use crate::services::MemoryStateStore;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::Notify;

    /// What the mock's `patterns` call should do
    enum PatternBehavior {
        Respond(Vec<PatternInsight>),
        Malformed,
        GatewayDown,
        /// Park until notified, then respond
        Block(Arc<Notify>),
    }

    struct MockClassifier {
        mood: Mood,
        confidence: f32,
        classify_calls: AtomicUsize,
        summarize_calls: AtomicUsize,
        pattern_calls: AtomicUsize,
        pattern_behavior: PatternBehavior,
        seen_pattern_context: std::sync::Mutex<Option<PatternContext>>,
    }

    impl MockClassifier {
        fn new(mood: Mood, confidence: f32) -> Self {
            Self {
                mood,
                confidence,
                classify_calls: AtomicUsize::new(0),
                summarize_calls: AtomicUsize::new(0),
                pattern_calls: AtomicUsize::new(0),
                pattern_behavior: PatternBehavior::Respond(vec![sample_insight()]),
                seen_pattern_context: std::sync::Mutex::new(None),
            }
        }

        fn with_patterns(mut self, behavior: PatternBehavior) -> Self {
            self.pattern_behavior = behavior;
            self
        }
    }

    fn sample_insight() -> PatternInsight {
        PatternInsight {
            pattern: "Evening dips".to_string(),
            frequency: 60.0,
            description: "Mood tends to drop in the evening.".to_string(),
            recommendation: "Plan a wind-down routine.".to_string(),
            timeframe: "past two weeks".to_string(),
        }
    }

    #[async_trait]
    impl MoodClassifier for MockClassifier {
        async fn classify(&self, _text: &str) -> Result<Classification, PipelineError> {
            self.classify_calls.fetch_add(1, Ordering::SeqCst);
            Ok(Classification {
                mood: self.mood,
                confidence: self.confidence,
                reasoning: None,
            })
        }

        async fn elaborate(&self, _mood: Mood, _text: &str) -> Result<String, PipelineError> {
            Ok("That sounds like a big moment. Be proud of yourself.".to_string())
        }

        async fn summarize(
            &self,
            _context: &SummaryContext,
        ) -> Result<SummaryNarrative, PipelineError> {
            self.summarize_calls.fetch_add(1, Ordering::SeqCst);
            Ok(SummaryNarrative {
                insights: vec!["A steady week overall.".to_string()],
                recommendations: vec!["Keep the morning walks.".to_string()],
            })
        }

        async fn patterns(
            &self,
            context: &PatternContext,
        ) -> Result<Vec<PatternInsight>, PipelineError> {
            self.pattern_calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_pattern_context.lock().unwrap() = Some(context.clone());
            match &self.pattern_behavior {
                PatternBehavior::Respond(insights) => Ok(insights.clone()),
                PatternBehavior::Malformed => Err(PipelineError::SchemaMismatch(
                    "expected a JSON array".to_string(),
                )),
                PatternBehavior::GatewayDown => {
                    Err(PipelineError::Gateway("connection refused".to_string()))
                }
                PatternBehavior::Block(gate) => {
                    gate.notified().await;
                    Ok(vec![sample_insight()])
                }
            }
        }

        fn provider_name(&self) -> &str {
            "mock"
        }
    }

    fn test_config() -> JournalConfig {
        JournalConfig {
            timezone: FixedOffset::east_opt(0).unwrap(),
            ..JournalConfig::default()
        }
    }

    async fn journal_with(classifier: Arc<MockClassifier>) -> Arc<MoodJournal> {
        MoodJournal::load(classifier, Arc::new(MemoryStateStore::new()), test_config())
            .await
            .unwrap()
    }

    fn entry_at(mood: Mood, timestamp: DateTime<Utc>) -> MoodEntry {
        let mut entry = MoodEntry::new("seeded".to_string(), mood, 80.0, InputMethod::Text);
        entry.timestamp = timestamp;
        entry
    }

    async fn seed(journal: &MoodJournal, entries: impl IntoIterator<Item = MoodEntry>) {
        let mut store = journal.entries.lock().await;
        for entry in entries {
            store.append(entry);
        }
    }

    fn now() -> DateTime<Utc> {
        // Wednesday; current week started Sunday 2026-08-23
        Utc.with_ymd_and_hms(2026, 8, 26, 15, 0, 0).unwrap()
    }

    fn last_week() -> DateTime<Utc> {
        // inside [2026-08-16, 2026-08-23)
        Utc.with_ymd_and_hms(2026, 8, 18, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_submit_records_classified_entry_at_head() {
        let classifier = Arc::new(MockClassifier::new(Mood::Excited, 92.0));
        let journal = journal_with(classifier).await;

        let entry = journal
            .submit("I aced my exam today!", InputMethod::Text)
            .await
            .unwrap();
        assert_eq!(entry.mood, Mood::Excited);
        assert_eq!(entry.confidence, 92.0);

        let history = journal.history().await;
        assert_eq!(history[0].id, entry.id);
        assert_eq!(history[0].text, "I aced my exam today!");
    }

    #[tokio::test]
    async fn test_empty_submit_makes_no_gateway_call() {
        let classifier = Arc::new(MockClassifier::new(Mood::Happy, 80.0));
        let journal = journal_with(classifier.clone()).await;

        let err = journal.submit("   ", InputMethod::Text).await.unwrap_err();
        assert!(matches!(err, PipelineError::Validation(_)));
        assert_eq!(classifier.classify_calls.load(Ordering::SeqCst), 0);
        assert!(journal.history().await.is_empty());
    }

    #[tokio::test]
    async fn test_submit_persists_across_reload() {
        let store = Arc::new(MemoryStateStore::new());
        let classifier = Arc::new(MockClassifier::new(Mood::Calm, 70.0));
        let journal = MoodJournal::load(classifier.clone(), store.clone(), test_config())
            .await
            .unwrap();
        journal
            .submit("quiet afternoon", InputMethod::Text)
            .await
            .unwrap();

        let reloaded = MoodJournal::load(classifier, store, test_config())
            .await
            .unwrap();
        let history = reloaded.history().await;
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].text, "quiet afternoon");
    }

    #[tokio::test]
    async fn test_weekly_summary_generated_for_closed_week() {
        let classifier = Arc::new(MockClassifier::new(Mood::Happy, 80.0));
        let journal = journal_with(classifier.clone()).await;
        seed(
            &journal,
            vec![
                entry_at(Mood::Calm, last_week()),
                entry_at(Mood::Happy, last_week() + Duration::hours(2)),
                entry_at(Mood::Calm, last_week() + Duration::hours(4)),
            ],
        )
        .await;

        let summary = journal
            .check_weekly_summary_at(now())
            .await
            .unwrap()
            .expect("summary should be generated");

        assert_eq!(
            summary.week_start,
            Utc.with_ymd_and_hms(2026, 8, 16, 0, 0, 0).unwrap()
        );
        assert_eq!(summary.entries.len(), 3);
        assert_eq!(summary.dominant_mood, Mood::Calm);
        assert_eq!(summary.mood_distribution.total(), 3);
        assert_eq!(summary.average_confidence, 80.0);
        assert_eq!(journal.summaries().await.len(), 1);
        assert_eq!(classifier.summarize_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_no_summary_for_sparse_week() {
        let classifier = Arc::new(MockClassifier::new(Mood::Happy, 80.0));
        let journal = journal_with(classifier.clone()).await;
        // three entries total, but only two inside the target week
        seed(
            &journal,
            vec![
                entry_at(Mood::Calm, last_week()),
                entry_at(Mood::Happy, last_week() + Duration::hours(2)),
                entry_at(Mood::Sad, now() - Duration::hours(1)),
            ],
        )
        .await;

        let result = journal.check_weekly_summary_at(now()).await.unwrap();
        assert!(result.is_none());
        assert_eq!(classifier.summarize_calls.load(Ordering::SeqCst), 0);
        assert!(journal.summaries().await.is_empty());
    }

    #[tokio::test]
    async fn test_recent_summary_suppresses_regeneration() {
        let classifier = Arc::new(MockClassifier::new(Mood::Happy, 80.0));
        let journal = journal_with(classifier.clone()).await;
        seed(
            &journal,
            vec![
                entry_at(Mood::Calm, last_week()),
                entry_at(Mood::Happy, last_week() + Duration::hours(2)),
                entry_at(Mood::Calm, last_week() + Duration::hours(4)),
            ],
        )
        .await;

        let first = journal.check_weekly_summary_at(now()).await.unwrap();
        assert!(first.is_some());
        // same clock, summary now on file: trigger must not double-fire
        let second = journal.check_weekly_summary_at(now()).await.unwrap();
        assert!(second.is_none());
        assert_eq!(journal.summaries().await.len(), 1);
        assert_eq!(classifier.summarize_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_week_start_never_duplicated() {
        let classifier = Arc::new(MockClassifier::new(Mood::Happy, 80.0));
        let journal = journal_with(classifier).await;
        seed(
            &journal,
            vec![
                entry_at(Mood::Calm, last_week()),
                entry_at(Mood::Happy, last_week() + Duration::hours(2)),
                entry_at(Mood::Calm, last_week() + Duration::hours(4)),
            ],
        )
        .await;

        journal.check_weekly_summary_at(now()).await.unwrap();
        // a week later the elapsed check passes again, but the target week
        // advances too, so week starts stay distinct
        let later = now() + Duration::days(14);
        seed(
            &journal,
            vec![
                entry_at(Mood::Sad, later - Duration::days(8)),
                entry_at(Mood::Sad, later - Duration::days(9)),
                entry_at(Mood::Happy, later - Duration::days(10)),
            ],
        )
        .await;
        journal.check_weekly_summary_at(later).await.unwrap();

        let summaries = journal.summaries().await;
        let mut starts: Vec<_> = summaries.iter().map(|s| s.week_start).collect();
        starts.sort();
        starts.dedup();
        assert_eq!(starts.len(), summaries.len());
    }

    #[tokio::test]
    async fn test_pattern_insights_replace_prior_set() {
        let classifier = Arc::new(MockClassifier::new(Mood::Happy, 80.0));
        let journal = journal_with(classifier).await;
        seed(
            &journal,
            (0..5).map(|i| entry_at(Mood::Happy, now() - Duration::hours(i))),
        )
        .await;

        let refreshed = journal.refresh_pattern_insights().await.unwrap();
        assert!(refreshed);
        assert_eq!(journal.insights().await.len(), 1);
    }

    #[tokio::test]
    async fn test_pattern_distribution_covers_only_sent_entries() {
        let classifier = Arc::new(MockClassifier::new(Mood::Happy, 80.0));
        let journal = journal_with(classifier.clone()).await;
        // 5 sad entries fall outside the 20-entry window handed over
        seed(
            &journal,
            (0..5).map(|i| entry_at(Mood::Sad, now() - Duration::days(3) - Duration::hours(i))),
        )
        .await;
        seed(
            &journal,
            (0..20).map(|i| entry_at(Mood::Happy, now() - Duration::hours(i))),
        )
        .await;

        assert!(journal.refresh_pattern_insights().await.unwrap());

        let context = classifier
            .seen_pattern_context
            .lock()
            .unwrap()
            .take()
            .expect("pattern call should have been made");
        assert_eq!(context.recent.len(), 20);
        assert_eq!(context.distribution.total() as usize, context.recent.len());
        assert_eq!(context.distribution.count(Mood::Sad), 0);
    }

    #[tokio::test]
    async fn test_too_few_entries_skips_pattern_call() {
        let classifier = Arc::new(MockClassifier::new(Mood::Happy, 80.0));
        let journal = journal_with(classifier.clone()).await;
        seed(
            &journal,
            (0..4).map(|i| entry_at(Mood::Happy, now() - Duration::hours(i))),
        )
        .await;

        assert!(!journal.refresh_pattern_insights().await.unwrap());
        assert_eq!(classifier.pattern_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_pattern_response_empties_set() {
        let classifier = Arc::new(
            MockClassifier::new(Mood::Happy, 80.0).with_patterns(PatternBehavior::Malformed),
        );
        let journal = journal_with(classifier).await;
        seed(
            &journal,
            (0..5).map(|i| entry_at(Mood::Happy, now() - Duration::hours(i))),
        )
        .await;
        journal.insights.lock().await.push(sample_insight());

        let refreshed = journal.refresh_pattern_insights().await.unwrap();
        assert!(!refreshed);
        assert!(journal.insights().await.is_empty());
    }

    #[tokio::test]
    async fn test_gateway_failure_keeps_prior_insights() {
        let classifier = Arc::new(
            MockClassifier::new(Mood::Happy, 80.0).with_patterns(PatternBehavior::GatewayDown),
        );
        let journal = journal_with(classifier).await;
        seed(
            &journal,
            (0..5).map(|i| entry_at(Mood::Happy, now() - Duration::hours(i))),
        )
        .await;
        journal.insights.lock().await.push(sample_insight());

        let err = journal.refresh_pattern_insights().await.unwrap_err();
        assert!(matches!(err, PipelineError::Gateway(_)));
        assert_eq!(journal.insights().await.len(), 1);
    }

    #[tokio::test]
    async fn test_pattern_requests_are_single_flight() {
        let gate = Arc::new(Notify::new());
        let classifier = Arc::new(
            MockClassifier::new(Mood::Happy, 80.0)
                .with_patterns(PatternBehavior::Block(gate.clone())),
        );
        let journal = journal_with(classifier.clone()).await;
        seed(
            &journal,
            (0..5).map(|i| entry_at(Mood::Happy, now() - Duration::hours(i))),
        )
        .await;

        let background = {
            let journal = journal.clone();
            tokio::spawn(async move { journal.refresh_pattern_insights().await })
        };
        // let the first request take the flag and park on the gate
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        // concurrent trigger is dropped, not queued
        assert!(!journal.refresh_pattern_insights().await.unwrap());

        gate.notify_one();
        assert!(background.await.unwrap().unwrap());
        assert_eq!(classifier.pattern_calls.load(Ordering::SeqCst), 1);
    }
}
