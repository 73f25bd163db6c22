use crate::domain::order::Order;
use crate::error::Result;
use std::io::Write;

/// Writes the administrative order listing as CSV.
///
/// Credentials are deliberately omitted: the listing is the back-office
/// overview, not the buyer's credential hand-off.
pub struct OrderWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OrderWriter<W> {
    /// Creates a new `OrderWriter` targeting any `Write` sink (e.g. stdout).
    pub fn new(target: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().from_writer(target),
        }
    }

    pub fn write_orders(&mut self, orders: &[Order]) -> Result<()> {
        self.writer.write_record([
            "order_id",
            "region_id",
            "country_id",
            "amount",
            "quantity",
            "status",
            "created_at",
        ])?;

        for order in orders {
            let amount = order.amount.to_string();
            let quantity = order.quantity.to_string();
            let created_at = order.created_at.to_rfc3339();
            self.writer.write_record([
                order.order_id.as_str(),
                order.region_id.as_str(),
                order.country_id.as_str(),
                amount.as_str(),
                quantity.as_str(),
                order.status.as_str(),
                created_at.as_str(),
            ])?;
        }

        self.writer.flush()?;
        Ok(())
    }
}
