use crate::core::ledger::SellerBook;
use crate::domain::ports::ReportStore;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{parse_integer, parse_positive_count};
use std::io::{BufRead, Write};

pub const DEFAULT_QUIT_TOKEN: &str = "q";

const BANNER: &str = "----------------------------------\n\n\
                      --- Welcome to Seller Stats! -----\n\n\
                      ----------------------------------\n\n";
const INVALID_COUNT: &str = "Invalid input. Please enter a positive nonzero number: ";
const INVALID_NUMBER: &str = "Invalid input. Please enter a number: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Terminated,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Iterations whose report was written.
    pub iterations: usize,
    pub sellers_recorded: usize,
}

/// Interactive data-entry loop: reads sellers from `input`, echoes prompts
/// and reports to `output` and saves each report through `store`.
pub struct Session<R, W, S> {
    input: R,
    output: W,
    store: S,
    quit_token: String,
}

impl<R: BufRead, W: Write, S: ReportStore> Session<R, W, S> {
    pub fn new(input: R, output: W, store: S) -> Self {
        Self {
            input,
            output,
            store,
            quit_token: DEFAULT_QUIT_TOKEN.to_string(),
        }
    }

    pub fn with_quit_token(mut self, quit_token: impl Into<String>) -> Self {
        self.quit_token = quit_token.into();
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs until the quit token is entered or input ends.
    pub async fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();
        let mut state = State::Running;

        self.output.write_all(BANNER.as_bytes())?;
        self.output.flush()?;

        while state == State::Running {
            state = match self.run_iteration(&mut summary).await {
                Ok(next) => next,
                Err(StatsError::InputClosed) => {
                    tracing::warn!("Input closed, ending session");
                    State::Terminated
                }
                Err(e) => return Err(e),
            };
        }

        tracing::info!(
            "Session finished after {} iteration(s), {} seller(s) recorded",
            summary.iterations,
            summary.sellers_recorded
        );
        Ok(summary)
    }

    async fn run_iteration(&mut self, summary: &mut SessionSummary) -> Result<State> {
        let count = self.prompt_parsed(
            "How many sellers do you want to enter? ",
            INVALID_COUNT,
            parse_positive_count,
        )?;
        tracing::debug!("Collecting {} seller(s)", count);

        let mut book = SellerBook::with_capacity(count);
        for i in 0..count {
            writeln!(self.output, "- Seller {} -", i + 1)?;

            let name = self.prompt("Name: ")?;
            let identifier =
                self.prompt_parsed("Social security number: ", INVALID_NUMBER, parse_integer)?;
            let district = self.prompt("District: ")?;
            let units_sold =
                self.prompt_parsed("Number of sold articles: ", INVALID_NUMBER, parse_integer)?;

            book.add(name, identifier, district, units_sold);
        }

        self.output.write_all(b"\n")?;

        book.sort();
        let report = book.render();

        self.store.write_report(&report).await?;
        tracing::info!("Report saved to {}", self.store.location());

        self.output.write_all(report.as_bytes())?;
        summary.iterations += 1;
        summary.sellers_recorded += book.len();

        let answer = self.prompt(&format!(
            "Write '{}' to quit, or any other key to restart: ",
            self.quit_token
        ))?;
        let next = if answer == self.quit_token {
            State::Terminated
        } else {
            State::Running
        };
        self.output.write_all(b"\n\n")?;
        self.output.flush()?;

        Ok(next)
    }

    fn prompt(&mut self, message: &str) -> Result<String> {
        self.output.write_all(message.as_bytes())?;
        self.output.flush()?;
        self.read_line()
    }

    /// Prompts with `message`, then keeps prompting with `retry` until
    /// `parse` accepts the line.
    fn prompt_parsed<T>(
        &mut self,
        message: &str,
        retry: &str,
        parse: fn(&str) -> Result<T>,
    ) -> Result<T> {
        let mut line = self.prompt(message)?;
        loop {
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) if e.is_input_error() => {
                    tracing::debug!("Rejected input: {}", e);
                    line = self.prompt(retry)?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(StatsError::InputClosed);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }
}
