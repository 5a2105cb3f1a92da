//! Glue code tying the gateway, the dispatcher task, and the terminal UI
//! together.
use std::sync::Arc;

use anyhow::{Context, Result};
use client_core::{Dispatcher, EngineConfig, NoticeLog, SessionEvent};
use gateway::{GameService, GatewayConfig, HttpGateway};
use protocol::Action;
use tokio::sync::{broadcast, mpsc};

use crate::event::EventLoop;
use crate::terminal;

/// Session-event fanout depth. One listener consuming strictly serial
/// round trips needs headroom only.
const EVENT_BUFFER: usize = 16;

pub struct TuiApp {
    service: Arc<dyn GameService>,
    engine_config: EngineConfig,
}

#[derive(Default)]
pub struct TuiAppBuilder {
    gateway_config: Option<GatewayConfig>,
    engine_config: Option<EngineConfig>,
    service: Option<Arc<dyn GameService>>,
}

impl TuiAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gateway_config(mut self, config: GatewayConfig) -> Self {
        self.gateway_config = Some(config);
        self
    }

    pub fn engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = Some(config);
        self
    }

    /// Inject a ready service, bypassing the HTTP gateway.
    pub fn service(mut self, service: Arc<dyn GameService>) -> Self {
        self.service = Some(service);
        self
    }

    pub fn build(self) -> Result<TuiApp> {
        let service: Arc<dyn GameService> = match self.service {
            Some(service) => service,
            None => {
                let config = self
                    .gateway_config
                    .context("a gateway config or an injected service is required")?;
                Arc::new(HttpGateway::new(&config).context("building the HTTP gateway")?)
            }
        };

        Ok(TuiApp {
            service,
            engine_config: self.engine_config.unwrap_or_default(),
        })
    }
}

impl TuiApp {
    pub fn builder() -> TuiAppBuilder {
        TuiAppBuilder::new()
    }

    pub async fn run(self) -> Result<()> {
        tracing::info!("terminal client starting");

        let (tx_intent, rx_intent) = mpsc::channel::<Action>(self.engine_config.intent_buffer);
        let (tx_event, rx_event) = broadcast::channel::<SessionEvent>(EVENT_BUFFER);

        let dispatcher = Dispatcher::new(self.service, rx_intent, tx_event);
        let notices = NoticeLog::new(self.engine_config.notice_capacity);
        let event_loop = EventLoop::new(rx_event, tx_intent, notices);

        // Spawn the dispatcher BEFORE terminal init so the opening load is
        // already in flight while the connecting screen comes up.
        let dispatcher_task = tokio::spawn(dispatcher.run());

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;

        let result = event_loop.run(&mut terminal).await;

        dispatcher_task.abort();
        let _ = dispatcher_task.await;

        terminal::restore()?;
        tracing::info!("terminal client exiting");

        result
    }
}

#[cfg(test)]
mod tests {
    use gateway::MockGameService;

    use super::*;

    #[test]
    fn build_requires_a_service_or_gateway_config() {
        assert!(TuiApp::builder().build().is_err());
        assert!(
            TuiApp::builder()
                .gateway_config(GatewayConfig::default())
                .build()
                .is_ok()
        );
        assert!(
            TuiApp::builder()
                .service(Arc::new(MockGameService::new()))
                .build()
                .is_ok()
        );
    }
}
