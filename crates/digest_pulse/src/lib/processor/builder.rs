use digest_store::DedupStore;

use crate::{
    mail::Mailer,
    yt::{ChannelPoller, TranscriptFetcher},
    DigestProcessor, Summarizer,
};

pub struct DigestProcessorBuilder<D = (), P = (), T = (), S = (), M = ()> {
    store: D,
    poller: P,
    transcripts: T,
    summarizer: S,
    mailer: M,
    max_duration_secs: u64,
    transcript_lang: String,
}

impl DigestProcessorBuilder {
    pub fn new() -> Self {
        Self {
            store: (),
            poller: (),
            transcripts: (),
            summarizer: (),
            mailer: (),
            max_duration_secs: 3600,
            transcript_lang: "en".to_string(),
        }
    }
}

impl Default for DigestProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, P, T, S, M> DigestProcessorBuilder<D, P, T, S, M> {
    pub fn store<D2: DedupStore + Send + Sync + 'static>(
        self,
        store: D2,
    ) -> DigestProcessorBuilder<D2, P, T, S, M> {
        DigestProcessorBuilder {
            store,
            poller: self.poller,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
            mailer: self.mailer,
            max_duration_secs: self.max_duration_secs,
            transcript_lang: self.transcript_lang,
        }
    }

    pub fn poller<P2: ChannelPoller + Send + Sync + 'static>(
        self,
        poller: P2,
    ) -> DigestProcessorBuilder<D, P2, T, S, M> {
        DigestProcessorBuilder {
            store: self.store,
            poller,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
            mailer: self.mailer,
            max_duration_secs: self.max_duration_secs,
            transcript_lang: self.transcript_lang,
        }
    }

    pub fn transcript_fetcher<T2: TranscriptFetcher + Send + Sync + 'static>(
        self,
        transcripts: T2,
    ) -> DigestProcessorBuilder<D, P, T2, S, M> {
        DigestProcessorBuilder {
            store: self.store,
            poller: self.poller,
            transcripts,
            summarizer: self.summarizer,
            mailer: self.mailer,
            max_duration_secs: self.max_duration_secs,
            transcript_lang: self.transcript_lang,
        }
    }

    pub fn summarizer<S2: Summarizer + Send + Sync + 'static>(
        self,
        summarizer: S2,
    ) -> DigestProcessorBuilder<D, P, T, S2, M> {
        DigestProcessorBuilder {
            store: self.store,
            poller: self.poller,
            transcripts: self.transcripts,
            summarizer,
            mailer: self.mailer,
            max_duration_secs: self.max_duration_secs,
            transcript_lang: self.transcript_lang,
        }
    }

    pub fn mailer<M2: Mailer + Send + Sync + 'static>(
        self,
        mailer: M2,
    ) -> DigestProcessorBuilder<D, P, T, S, M2> {
        DigestProcessorBuilder {
            store: self.store,
            poller: self.poller,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
            mailer,
            max_duration_secs: self.max_duration_secs,
            transcript_lang: self.transcript_lang,
        }
    }

    pub fn max_duration_secs(mut self, max_duration_secs: u64) -> Self {
        self.max_duration_secs = max_duration_secs;
        self
    }

    pub fn transcript_lang(mut self, lang: impl Into<String>) -> Self {
        self.transcript_lang = lang.into();
        self
    }
}

impl<D, P, T, S, M> DigestProcessorBuilder<D, P, T, S, M>
where
    D: DedupStore + Send + Sync + 'static,
    P: ChannelPoller + Send + Sync + 'static,
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
    M: Mailer + Send + Sync + 'static,
{
    pub fn build(self) -> DigestProcessor<D, P, T, S, M> {
        DigestProcessor {
            store: self.store,
            poller: self.poller,
            transcripts: self.transcripts,
            summarizer: self.summarizer,
            mailer: self.mailer,
            max_duration_secs: self.max_duration_secs,
            transcript_lang: self.transcript_lang,
        }
    }
}
