//! Draft invoices.
//!
//! A [`SaleEditor`] holds the state of one sale form. It borrows the customer list and
//! product catalog for lookups and never changes them. Every change to a line, the
//! discount or the tax rate recomputes the invoice totals, so [`SaleEditor::totals`] is
//! always consistent with [`SaleEditor::items`].
//!
//! Nothing is stored until [`SaleEditor::save`] is awaited. [`SaleEditor::discard`]
//! drops the draft without sending anything.
use crate::clients::SaleClient;
use crate::format::parse_amount;
use crate::invoice::{compute_totals, InvoiceTotals};
use crate::model::{
    Customer, CustomerId, PaymentStatus, Product, ProductId, Sale, SaleCreate, SaleId, SaleItem,
};
use crate::sale_actor::SaleError;
use bizdash_actor::Repository;
use chrono::NaiveDate;
use tracing::{debug, info, instrument};

/// Whether saving creates a new sale or replaces an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(SaleId),
}

/// Handle to one line of a draft. Handles stay valid when other lines are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(u32);

#[derive(Debug, Clone, PartialEq)]
struct DraftLine {
    id: LineId,
    item: SaleItem,
}

/// What a successful save produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveReceipt {
    pub sale: Sale,
    /// `Sale created successfully` or `Sale updated successfully`.
    pub title: String,
    /// `Invoice for <customer> has been created.` (or `updated.`).
    pub message: String,
}

/// An invoice being edited.
#[derive(Debug, Clone)]
pub struct SaleEditor<'a> {
    mode: EditorMode,
    customers: &'a [Customer],
    products: &'a [Product],
    customer_id: Option<CustomerId>,
    customer_name: String,
    date: NaiveDate,
    lines: Vec<DraftLine>,
    next_line: u32,
    discount: f64,
    tax_rate: f64,
    payment_status: PaymentStatus,
    payment_method: Option<String>,
    notes: Option<String>,
    totals: InvoiceTotals,
}

impl<'a> SaleEditor<'a> {
    /// Empty draft dated `date`, with no lines and status `pending`.
    pub fn create(
        customers: &'a [Customer],
        products: &'a [Product],
        date: NaiveDate,
        tax_rate: f64,
    ) -> Self {
        Self {
            mode: EditorMode::Create,
            customers,
            products,
            customer_id: None,
            customer_name: String::new(),
            date,
            lines: Vec::new(),
            next_line: 0,
            discount: 0.0,
            tax_rate,
            payment_status: PaymentStatus::Pending,
            payment_method: None,
            notes: None,
            totals: InvoiceTotals::default(),
        }
    }

    /// Draft pre-filled from an existing sale.
    pub fn edit(sale: &Sale, customers: &'a [Customer], products: &'a [Product]) -> Self {
        let mut editor = Self::create(customers, products, sale.date, sale.tax_rate);
        editor.mode = EditorMode::Edit(sale.id);
        editor.customer_id = sale.customer_id;
        editor.customer_name = sale.customer_name.clone();
        editor.discount = sale.discount;
        editor.payment_status = sale.payment_status;
        editor.payment_method = sale.payment_method.clone();
        editor.notes = sale.notes.clone();
        for item in &sale.items {
            editor.push_line(item.clone());
        }
        editor.recompute();
        editor
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    pub fn totals(&self) -> InvoiceTotals {
        self.totals
    }

    /// Line handles in display order.
    pub fn line_ids(&self) -> Vec<LineId> {
        self.lines.iter().map(|line| line.id).collect()
    }

    pub fn items(&self) -> impl Iterator<Item = &SaleItem> {
        self.lines.iter().map(|line| &line.item)
    }

    pub fn item(&self, line: LineId) -> Option<&SaleItem> {
        self.lines.iter().find(|l| l.id == line).map(|l| &l.item)
    }

    /// Selects a customer and copies their name. An unknown id leaves the name empty.
    pub fn select_customer(&mut self, id: CustomerId) {
        self.customer_name = self
            .customers
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        self.customer_id = Some(id);
    }

    /// Appends a blank line (no product, quantity 1, price 0).
    pub fn add_item(&mut self) -> LineId {
        let id = self.push_line(SaleItem::blank());
        self.recompute();
        id
    }

    pub fn remove_item(&mut self, line: LineId) {
        self.lines.retain(|l| l.id != line);
        self.recompute();
    }

    /// Puts a product on a line at its current catalog price.
    ///
    /// An id that is not in the catalog leaves the line as it was.
    pub fn select_product(&mut self, line: LineId, product_id: ProductId) {
        let products = self.products;
        let Some(product) = products.iter().find(|p| p.id == product_id) else {
            debug!(%product_id, "Unknown product, line unchanged");
            return;
        };
        if let Some(item) = self.item_mut(line) {
            item.product_id = Some(product.id);
            item.product_name = product.name.clone();
            item.price = product.price;
            item.recompute();
        }
        self.recompute();
    }

    pub fn set_quantity(&mut self, line: LineId, quantity: f64) {
        if let Some(item) = self.item_mut(line) {
            item.quantity = quantity;
            item.recompute();
        }
        self.recompute();
    }

    /// Sets a quantity from form text; unparseable text means `0`.
    pub fn set_quantity_text(&mut self, line: LineId, text: &str) {
        self.set_quantity(line, parse_amount(text));
    }

    pub fn set_discount(&mut self, discount: f64) {
        self.discount = discount;
        self.recompute();
    }

    pub fn set_discount_text(&mut self, text: &str) {
        self.set_discount(parse_amount(text));
    }

    pub fn set_tax_rate(&mut self, tax_rate: f64) {
        self.tax_rate = tax_rate;
        self.recompute();
    }

    pub fn set_tax_rate_text(&mut self, text: &str) {
        self.set_tax_rate(parse_amount(text));
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }

    pub fn set_payment_status(&mut self, status: PaymentStatus) {
        self.payment_status = status;
    }

    pub fn set_payment_method(&mut self, method: impl Into<String>) {
        self.payment_method = Some(method.into());
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = Some(notes.into());
    }

    /// The form contents as a create/update payload.
    pub fn to_payload(&self) -> SaleCreate {
        SaleCreate {
            customer_id: self.customer_id,
            customer_name: self.customer_name.clone(),
            date: self.date,
            items: self.items().cloned().collect(),
            discount: self.discount,
            tax_rate: self.tax_rate,
            payment_status: self.payment_status,
            payment_method: self.payment_method.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Sends the draft to the sale store and returns the stored sale.
    #[instrument(skip_all, fields(mode = ?self.mode, total = self.totals.total))]
    pub async fn save(self, client: &SaleClient) -> Result<SaveReceipt, SaleError> {
        let payload = self.to_payload();
        let (sale, verb) = match self.mode {
            EditorMode::Create => {
                let id = client.create_sale(payload).await?;
                let sale = client
                    .get(id)
                    .await?
                    .ok_or_else(|| SaleError::NotFound(id.to_string()))?;
                (sale, "created")
            }
            EditorMode::Edit(id) => (client.update_sale(id, payload).await?, "updated"),
        };

        info!(id = %sale.id, customer = %sale.customer_name, "Sale saved");
        Ok(SaveReceipt {
            title: format!("Sale {verb} successfully"),
            message: format!("Invoice for {} has been {verb}.", sale.customer_name),
            sale,
        })
    }

    /// Closes the form without saving.
    pub fn discard(self) {
        debug!(mode = ?self.mode, lines = self.lines.len(), "Draft discarded");
    }

    fn push_line(&mut self, item: SaleItem) -> LineId {
        let id = LineId(self.next_line);
        self.next_line += 1;
        self.lines.push(DraftLine { id, item });
        id
    }

    fn item_mut(&mut self, line: LineId) -> Option<&mut SaleItem> {
        self.lines
            .iter_mut()
            .find(|l| l.id == line)
            .map(|l| &mut l.item)
    }

    fn recompute(&mut self) {
        let items: Vec<&SaleItem> = self.lines.iter().map(|l| &l.item).collect();
        self.totals = compute_totals(&items, self.discount, self.tax_rate);
    }
}
