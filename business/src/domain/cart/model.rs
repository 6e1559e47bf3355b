use crate::domain::catalog::model::Product;

/// One (product, quantity) entry in a cart.
///
/// The full product is embedded rather than just its id: a line keeps the
/// snapshot that was current when it was added, so a later catalog price
/// change does not reprice lines already in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u64 {
        self.product.sale_price * u64::from(self.quantity)
    }
}

/// Ordered cart contents. Lines keep insertion order: the first product
/// added stays first. At most one line exists per product id, and no line
/// ever has a zero quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    /// Constructor for lines already persisted by the storage adapter
    /// (no validation, the adapter rejects invalid records on load).
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Merges the quantity into an existing line for the same product id,
    /// or appends a new line at the end. A zero quantity is ignored.
    pub fn add(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine { product, quantity });
        }
    }

    /// Drops the line for the given product id; no-op when absent.
    pub fn remove(&mut self, product_id: u32) {
        self.lines.retain(|l| l.product.id != product_id);
    }

    /// Overwrites the quantity of an existing line. Zero removes the line
    /// instead; an absent id is a no-op (it never creates a line).
    pub fn set_quantity(&mut self, product_id: u32, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `sale_price × quantity` over all lines.
    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}
