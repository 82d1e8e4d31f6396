//! The view-model orchestrator behind the transaction viewer.
//!
//! [TransactionBrowser] owns every piece of UI state for the viewer and is
//! the only place that state is mutated. The presentation layer reads the
//! derived views and triggers the actions; it never touches the fields
//! directly.

use crate::{
    Error,
    model::{Employee, EmployeeId, PageCursor, Transaction},
    source::TransactionSource,
};

/// Reconciles the three feeds of the remote data source into one displayed
/// transaction list.
///
/// The browser is either in *unfiltered mode* (`employee_filter` is `None`),
/// where it shows the pages of the all-transactions feed accumulated so far,
/// or in *filtered mode*, where it shows the unpaginated transaction list of
/// one employee. Switching modes never discards the unfiltered accumulation,
/// so clearing the filter restores the already-fetched pages without
/// another round trip.
///
/// All actions take `&mut self`, so two actions can never interleave on one
/// browser; callers that share a browser across tasks serialize the actions
/// through a lock and get the same guarantee.
#[derive(Debug)]
pub struct TransactionBrowser<S> {
    source: S,
    /// `None` until the employee list has been fetched; distinct from a
    /// loaded-but-empty list.
    employees: Option<Vec<Employee>>,
    /// Pages of the all-transactions feed merged in fetch order. Each page
    /// is appended exactly once, when its fetch resolves.
    accumulated: Vec<Transaction>,
    /// Continuation for the all-transactions feed, `None` once exhausted
    /// (or before the first page has been fetched).
    next_cursor: Option<PageCursor>,
    employee_filter: Option<EmployeeId>,
    /// Cache of the most recent per-employee fetch; only displayed in
    /// filtered mode.
    employee_transactions: Vec<Transaction>,
}

impl<S: TransactionSource> TransactionBrowser<S> {
    /// Create a browser with no data loaded, in unfiltered mode.
    pub fn new(source: S) -> Self {
        Self {
            source,
            employees: None,
            accumulated: Vec::new(),
            next_cursor: None,
            employee_filter: None,
            employee_transactions: Vec::new(),
        }
    }

    /// Load the employee list and the first page of the all-transactions
    /// feed.
    ///
    /// Does nothing when the employee list is already loaded, so the page
    /// handler can call this on every render. The employee fetch is awaited
    /// to completion before the page fetch starts; each result is committed
    /// as its fetch resolves.
    ///
    /// # Errors
    ///
    /// Returns [Error::Fetch] when either fetch fails. Data committed by an
    /// earlier step of the action is kept.
    pub async fn load_initial(&mut self) -> Result<(), Error> {
        if self.employees.is_some() {
            return Ok(());
        }

        let employees = self.source.employees().await?;
        self.employees = Some(employees);

        let page = self.source.transactions_page(None).await?;
        self.accumulated.extend(page.data);
        self.next_cursor = page.next_page;

        Ok(())
    }

    /// Apply an employee selection from the filter control.
    ///
    /// The sentinel ID clears the filter and re-runs the initial-load path,
    /// which is a no-op whenever the data is already cached; the previously
    /// accumulated pages become the displayed list again. Any other ID
    /// fetches that employee's transactions and switches to filtered mode.
    ///
    /// # Errors
    ///
    /// Returns [Error::Fetch] or [Error::UnknownEmployee] when the fetch
    /// fails. Nothing is committed on failure: the mode, filter and both
    /// caches are exactly as they were before the call.
    pub async fn select_employee(&mut self, employee_id: &EmployeeId) -> Result<(), Error> {
        if employee_id.is_sentinel() {
            self.employee_filter = None;
            return self.load_initial().await;
        }

        // Fetch before committing the filter so a failed selection leaves
        // the current view intact.
        let transactions = self.source.transactions_for_employee(employee_id).await?;
        self.employee_filter = Some(employee_id.clone());
        self.employee_transactions = transactions;

        Ok(())
    }

    /// Fetch the next page of the all-transactions feed and append it to
    /// the accumulation.
    ///
    /// Does nothing in filtered mode or once the feed is exhausted, so a
    /// stray "View More" request after the last page is harmless.
    ///
    /// # Errors
    ///
    /// Returns [Error::Fetch] when the page fetch fails; the accumulation
    /// and cursor are left untouched.
    pub async fn load_more(&mut self) -> Result<(), Error> {
        if self.employee_filter.is_some() {
            return Ok(());
        }
        let Some(cursor) = self.next_cursor.clone() else {
            return Ok(());
        };

        let page = self.source.transactions_page(Some(&cursor)).await?;
        self.accumulated.extend(page.data);
        self.next_cursor = page.next_page;

        Ok(())
    }

    /// The transactions to display: the employee-scoped list in filtered
    /// mode, otherwise the accumulated unfiltered pages.
    pub fn transactions(&self) -> &[Transaction] {
        match self.employee_filter {
            Some(_) => &self.employee_transactions,
            None => &self.accumulated,
        }
    }

    /// Whether a further page of the all-transactions feed can be loaded.
    ///
    /// Always `false` in filtered mode, regardless of the stored cursor.
    pub fn can_load_more(&self) -> bool {
        self.employee_filter.is_none() && self.next_cursor.is_some()
    }

    /// The entries for the filter control: the sentinel first, then every
    /// employee. Empty while the employee list has not loaded yet.
    pub fn filter_options(&self) -> Vec<Employee> {
        match &self.employees {
            None => Vec::new(),
            Some(employees) => {
                let mut options = Vec::with_capacity(employees.len() + 1);
                options.push(Employee::sentinel());
                options.extend(employees.iter().cloned());
                options
            }
        }
    }

    /// Whether the employee list has been fetched. Drives the filter
    /// control's loading label.
    pub fn employees_loaded(&self) -> bool {
        self.employees.is_some()
    }

    /// The currently selected employee filter, `None` in unfiltered mode.
    pub fn employee_filter(&self) -> Option<&EmployeeId> {
        self.employee_filter.as_ref()
    }
}
