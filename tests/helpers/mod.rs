/// Test doubles to simulate the station CAN bus during integration tests.
use bss_can::protocol::transport::{can_frame::CanFrame, traits::can_bus::CanBus};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

#[derive(Clone)]
#[allow(dead_code)]
/// In-memory CAN bus reproducing the `CanBus` trait behavior.
pub struct MockCanBus {
    tx: mpsc::UnboundedSender<CanFrame>,
    rx: Arc<Mutex<mpsc::UnboundedReceiver<CanFrame>>>,
}

#[allow(dead_code)]
impl MockCanBus {
    /// Construct a pair of interconnected buses (control center ↔ module).
    pub fn create_pair() -> (Self, Self) {
        let (center_tx, module_rx) = mpsc::unbounded_channel();
        let (module_tx, center_rx) = mpsc::unbounded_channel();

        let center_bus = Self {
            tx: center_tx,
            rx: Arc::new(Mutex::new(center_rx)),
        };

        let module_bus = Self {
            tx: module_tx,
            rx: Arc::new(Mutex::new(module_rx)),
        };

        (center_bus, module_bus)
    }
}

impl CanBus for MockCanBus {
    type Error = ();

    async fn send<'a>(&'a mut self, frame: &'a CanFrame) -> Result<(), Self::Error> {
        self.tx.send(frame.clone()).map_err(|_| ())?;
        Ok(())
    }

    async fn recv(&mut self) -> Result<CanFrame, Self::Error> {
        let mut rx = self.rx.lock().await;
        rx.recv().await.ok_or(())
    }
}

#[allow(dead_code)]
/// Bus whose driver always refuses to transmit.
pub struct FailingCanBus;

#[derive(Debug, PartialEq)]
#[allow(dead_code)]
pub struct TxBufferFull;

impl CanBus for FailingCanBus {
    type Error = TxBufferFull;

    async fn send<'a>(&'a mut self, _frame: &'a CanFrame) -> Result<(), Self::Error> {
        Err(TxBufferFull)
    }

    async fn recv(&mut self) -> Result<CanFrame, Self::Error> {
        Err(TxBufferFull)
    }
}
