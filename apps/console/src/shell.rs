//! # Shell
//!
//! The top-level menu loop.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  loop {                                                                 │
//! │      banner + menu + options                                            │
//! │      "What would you like to do? "                                      │
//! │        1..8   → commands::order                                         │
//! │        v      → commands::orders                                        │
//! │        stats  → commands::stats                                         │
//! │        q, EOF → goodbye, return                                         │
//! │        other  → "Invalid input. Please try again."                      │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failing command is logged and reported, then the menu is shown again.
//! Only terminal I/O failures end the loop early.

use chrono::{NaiveDateTime, SubsecRound};
use tracing::{debug, error};

use rushmore_core::Catalog;
use rushmore_store::{OrderStore, StorageBackend};

use crate::commands::order::{take_order, OrderContext};
use crate::commands::orders::view_orders;
use crate::commands::stats::view_stats;
use crate::commands::MenuCommand;
use crate::config::ConsoleConfig;
use crate::error::{AppError, AppResult};
use crate::prompt::Prompter;

pub const MENU_PROMPT: &str = "What would you like to do? ";

/// Local wall-clock time, second precision.
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local().trunc_subsecs(0)
}

/// The interactive console.
pub struct Shell<'a, B, P> {
    catalog: &'a Catalog,
    config: &'a ConsoleConfig,
    store: OrderStore<B>,
    prompter: P,
    clock: fn() -> NaiveDateTime,
}

impl<'a, B, P> Shell<'a, B, P>
where
    B: StorageBackend,
    P: Prompter,
{
    pub fn new(
        catalog: &'a Catalog,
        config: &'a ConsoleConfig,
        store: OrderStore<B>,
        prompter: P,
    ) -> Self {
        Shell {
            catalog,
            config,
            store,
            prompter,
            clock: local_now,
        }
    }

    /// Replaces the clock used to stamp orders.
    pub fn with_clock(mut self, clock: fn() -> NaiveDateTime) -> Self {
        self.clock = clock;
        self
    }

    pub fn store(&self) -> &OrderStore<B> {
        &self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Runs the menu loop until `q` or end of input.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.show_menu()?;

            let Some(answer) = self.prompter.ask(MENU_PROMPT)? else {
                debug!("Input closed at the menu");
                self.prompter.say("")?;
                self.say_goodbye()?;
                return Ok(());
            };

            let command = MenuCommand::parse(&answer, self.catalog);
            debug!(?command, "Menu command");

            let result = match command {
                MenuCommand::Quit => {
                    self.say_goodbye()?;
                    return Ok(());
                }
                MenuCommand::ViewOrders => view_orders(&self.store, &mut self.prompter),
                MenuCommand::Stats => view_stats(&self.store, self.config, &mut self.prompter),
                MenuCommand::Order(key) => self.order(&key),
                MenuCommand::Invalid(_) => self
                    .prompter
                    .say("Invalid input. Please try again.")
                    .map_err(AppError::from),
            };

            if let Err(err) = result {
                self.report(err)?;
            }
        }
    }

    fn order(&mut self, key: &str) -> AppResult<()> {
        let item = self.catalog.lookup(key)?;
        take_order(
            item,
            OrderContext {
                config: self.config,
                store: &mut self.store,
                prompter: &mut self.prompter,
                clock: self.clock,
            },
        )?;
        Ok(())
    }

    /// Shows a failed command; terminal failures are passed up.
    fn report(&mut self, err: AppError) -> AppResult<()> {
        if err.is_fatal() {
            return Err(err);
        }
        error!(code = err.code.as_str(), message = %err.message, "Command failed");
        self.prompter.say(&format!("Error: {}", err.message))?;
        Ok(())
    }

    fn show_menu(&mut self) -> AppResult<()> {
        self.prompter.say("")?;
        self.prompter.say(&format!("Welcome to {}!", self.config.shop_name))?;
        self.prompter.say("Menu:")?;
        for item in self.catalog.items() {
            self.prompter.say(&format!(
                "{}: {} - {}",
                item.key,
                item.name,
                self.config.format_currency(item.price)
            ))?;
        }
        self.prompter.say("")?;
        self.prompter.say("Options:")?;
        self.prompter.say("Enter pizza number to order")?;
        self.prompter.say("Type 'v' to view all orders")?;
        self.prompter.say("Type 'stats' to view order stats")?;
        self.prompter.say("Type 'q' to quit")?;
        Ok(())
    }

    fn say_goodbye(&mut self) -> AppResult<()> {
        self.prompter
            .say(&format!("Goodbye from {}!", self.config.shop_name))?;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
