use crate::core::cep::{self, Cep};
use crate::core::currency::Money;
use crate::core::debounce::Debouncer;
use crate::domain::model::ShippingResult;
use crate::domain::ports::ShippingQuoter;
use crate::utils::error::{Result, ShippingError};
use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Subtotal of the sample order (Anel Solitário Royal + Brincos Pérola Barroca).
pub const DEFAULT_SUBTOTAL: u64 = 1_630_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "quote", rename_all = "lowercase")]
pub enum ShippingState {
    /// No valid CEP entered; any previous quote has been cleared.
    Pending,
    Calculating,
    Ready(ShippingResult),
}

impl ShippingState {
    pub fn result(&self) -> Option<&ShippingResult> {
        match self {
            ShippingState::Ready(result) => Some(result),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct SlotState {
    generation: u64,
    shipping: ShippingState,
}

fn lock(slot: &Mutex<SlotState>) -> MutexGuard<'_, SlotState> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// One checkout form's view of shipping: the masked CEP, the debounced quote
/// and the resulting order total.
pub struct CheckoutSession<Q: ShippingQuoter + 'static> {
    quoter: Arc<Q>,
    subtotal: Money,
    zip: String,
    slot: Arc<Mutex<SlotState>>,
    debouncer: Debouncer,
}

impl<Q: ShippingQuoter + 'static> CheckoutSession<Q> {
    /// # Panics
    ///
    /// Construction itself needs no runtime, but [`input_zip`](Self::input_zip)
    /// panics when a complete CEP is entered outside a tokio runtime, since the
    /// debounced quote runs as a spawned task.
    pub fn new(quoter: Arc<Q>, subtotal: u64, debounce: Duration) -> Self {
        Self {
            quoter,
            subtotal: Money(subtotal),
            zip: String::new(),
            slot: Arc::new(Mutex::new(SlotState {
                generation: 0,
                shipping: ShippingState::Pending,
            })),
            debouncer: Debouncer::new(debounce),
        }
    }

    /// Applies a new field value and returns the masked form to display.
    ///
    /// A complete CEP schedules a quote after the debounce delay; anything
    /// else cancels the pending quote and clears the shipping state.
    ///
    /// # Panics
    ///
    /// Panics if `raw` masks to a complete CEP and no tokio runtime is running.
    pub fn input_zip(&mut self, raw: &str) -> String {
        let masked = cep::mask(raw);
        if masked == self.zip {
            return masked;
        }
        self.zip = masked.clone();

        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.shipping = ShippingState::Pending;
            slot.generation
        };

        let cep = match Cep::parse(&masked) {
            Ok(cep) => cep,
            Err(_) => {
                tracing::debug!("CEP '{}' incomplete, clearing shipping", masked);
                self.debouncer.cancel();
                return masked;
            }
        };

        lock(&self.slot).shipping = ShippingState::Calculating;
        tracing::debug!(
            "Scheduling shipping quote for {} in {:?}",
            cep,
            self.debouncer.delay()
        );

        let quoter = Arc::clone(&self.quoter);
        let slot = Arc::clone(&self.slot);
        self.debouncer.schedule(async move {
            let quoted = quoter.quote(&cep);
            let mut slot = lock(&slot);
            if slot.generation != generation {
                return;
            }
            slot.shipping = match quoted {
                Ok(result) => {
                    tracing::info!(
                        "Shipping for {}: {} ({})",
                        cep,
                        Money(result.price),
                        result.region
                    );
                    ShippingState::Ready(result)
                }
                Err(e) => {
                    tracing::error!("Shipping quote for {} failed: {}", cep, e);
                    ShippingState::Pending
                }
            };
        });

        masked
    }

    /// Like [`input_zip`](Self::input_zip) for raw bytes; invalid UTF-8 is
    /// replaced before masking, which drops it along with every other non-digit.
    pub fn input_zip_bytes(&mut self, raw: &[u8]) -> String {
        self.input_zip(&String::from_utf8_lossy(raw))
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn shipping_state(&self) -> ShippingState {
        lock(&self.slot).shipping
    }

    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    pub fn total(&self) -> Money {
        self.summary().total
    }

    pub fn summary(&self) -> OrderSummary {
        let shipping = self.shipping_state();
        let total = match shipping {
            ShippingState::Ready(result) => self.subtotal + Money(result.price),
            _ => self.subtotal,
        };
        OrderSummary {
            subtotal: self.subtotal,
            shipping,
            total,
        }
    }

    /// Waits until any scheduled quote has been applied.
    pub async fn settle(&mut self) {
        self.debouncer.settle().await;
    }

    pub fn confirm(&self) -> Result<OrderConfirmation> {
        let ShippingState::Ready(shipping) = self.shipping_state() else {
            return Err(ShippingError::ShippingUnavailable);
        };
        let cep = Cep::parse(&self.zip)?;
        let confirmation = OrderConfirmation {
            cep,
            subtotal: self.subtotal,
            shipping,
            total: self.subtotal + Money(shipping.price),
        };
        tracing::info!(
            "Order confirmed for {}: total {}",
            confirmation.cep,
            confirmation.total
        );
        Ok(confirmation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub subtotal: Money,
    pub shipping: ShippingState,
    pub total: Money,
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Subtotal: {}", self.subtotal)?;
        match &self.shipping {
            ShippingState::Pending => writeln!(f, "Frete: Informe o CEP")?,
            ShippingState::Calculating => writeln!(f, "Frete: Calculando...")?,
            ShippingState::Ready(result) => writeln!(f, "Frete: {}", Money(result.price))?,
        }
        write!(f, "Total: {}", self.total)?;
        if let ShippingState::Ready(result) = &self.shipping {
            write!(f, "\nEntrega estimada: {}", result.delivery_estimate())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    pub cep: Cep,
    pub subtotal: Money,
    pub shipping: ShippingResult,
    pub total: Money,
}
