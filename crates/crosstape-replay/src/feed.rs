//! CSV feed loading and fill export.
//!
//! A feed that cannot be opened is fatal; a malformed row is not. Rows
//! with too few fields or unparseable values are skipped with a warning
//! and the rest of the feed loads normally.

use std::path::Path;
use std::str::FromStr;

use crosstape_types::{
    BookTick, CrosstapeError, Fill, Order, OrderIdCounter, OrderKind, OrderSide, Result,
    TimeInForce, TimeToken, constants,
};
use rust_decimal::Decimal;

use crate::tape::QuoteTape;

/// Field layout of a quote row: `ts,sym,bid,ask,bsz,asz`. The symbol
/// column is carried in the feed but not used by the simulator.
const QUOTE_FIELDS: usize = 6;

/// Field layout of an order row: `ts,sym,side,kind,price,qty,tif`.
const ORDER_FIELDS: usize = 7;

fn open_reader(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|err| CrosstapeError::FeedOpen {
            path: path.display().to_string(),
            reason: err.to_string(),
        })
}

fn field<T: FromStr>(record: &csv::StringRecord, idx: usize) -> Option<T> {
    record.get(idx)?.trim().parse().ok()
}

/// Load a quote tape from a CSV feed.
///
/// # Errors
///
/// Returns [`CrosstapeError::FeedOpen`] if the file cannot be opened or
/// its header cannot be read.
pub fn load_quotes(path: impl AsRef<Path>) -> Result<QuoteTape> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;

    let mut ticks = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(row, %err, "skipping unreadable quote row");
                continue;
            }
        };
        if record.len() < QUOTE_FIELDS {
            tracing::warn!(row, fields = record.len(), "skipping short quote row");
            continue;
        }
        let parsed = (|| {
            Some(BookTick::new(
                TimeToken::new(record.get(0)?),
                field::<Decimal>(&record, 2)?,
                field::<Decimal>(&record, 3)?,
                field::<u64>(&record, 4)?,
                field::<u64>(&record, 5)?,
            ))
        })();
        match parsed {
            Some(tick) => ticks.push(tick),
            None => tracing::warn!(row, "skipping unparseable quote row"),
        }
    }

    tracing::info!(path = %path.display(), ticks = ticks.len(), "quote tape loaded");
    Ok(QuoteTape::new(ticks))
}

/// Load historical orders from a CSV feed.
///
/// Ids are assigned sequentially from 1, to accepted rows only — a
/// skipped row does not consume an id.
///
/// # Errors
///
/// Returns [`CrosstapeError::FeedOpen`] if the file cannot be opened or
/// its header cannot be read.
pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<Order>> {
    let path = path.as_ref();
    let mut reader = open_reader(path)?;
    let ids = OrderIdCounter::new();

    let mut orders = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(row, %err, "skipping unreadable order row");
                continue;
            }
        };
        if record.len() < ORDER_FIELDS {
            tracing::warn!(row, fields = record.len(), "skipping short order row");
            continue;
        }
        let parsed = (|| {
            Some(Order::new(
                ids.next_id(),
                record.get(1)?,
                field::<OrderSide>(&record, 2)?,
                field::<OrderKind>(&record, 3)?,
                field::<u64>(&record, 5)?,
                field::<Decimal>(&record, 4)?,
                TimeToken::new(record.get(0)?),
                field::<TimeInForce>(&record, 6)?,
            ))
        })();
        match parsed {
            Some(order) => orders.push(order),
            None => tracing::warn!(row, "skipping unparseable order row"),
        }
    }

    tracing::info!(path = %path.display(), orders = orders.len(), "order feed loaded");
    Ok(orders)
}

/// Export fills as CSV, prices fixed to 8 decimal places.
///
/// Returns the number of fills written.
///
/// # Errors
///
/// Returns [`CrosstapeError::Export`] if the file cannot be created or a
/// record fails to write.
pub fn write_fills(path: impl AsRef<Path>, fills: &[Fill]) -> Result<usize> {
    let path = path.as_ref();
    let export_err = |err: csv::Error| CrosstapeError::Export {
        path: path.display().to_string(),
        reason: err.to_string(),
    };

    let mut writer = csv::Writer::from_path(path).map_err(export_err)?;
    writer
        .write_record(["ts", "order_id", "side", "px", "qty", "liq"])
        .map_err(export_err)?;
    for fill in fills {
        writer
            .write_record([
                fill.ts.as_str(),
                &fill.order_id.to_string(),
                &fill.side.to_string(),
                &format!(
                    "{:.prec$}",
                    fill.price.round_dp(constants::FILL_PRICE_PRECISION),
                    prec = constants::FILL_PRICE_PRECISION as usize
                ),
                &fill.quantity.to_string(),
                &fill.liquidity.to_string(),
            ])
            .map_err(export_err)?;
    }
    writer.flush().map_err(|err| CrosstapeError::Export {
        path: path.display().to_string(),
        reason: err.to_string(),
    })?;

    tracing::info!(path = %path.display(), fills = fills.len(), "fills exported");
    Ok(fills.len())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crosstape_types::{LiquidityRole, OrderId};

    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("crosstape-feed-{}-{name}", std::process::id()))
    }

    fn write_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = temp_path(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn quotes_load_skipping_short_and_bad_rows() {
        let path = write_file(
            "quotes.csv",
            "ts,sym,bid,ask,bsz,asz\n\
             t0,AAPL,100.0,100.2,10,20\n\
             t1,AAPL,100.1\n\
             t2,AAPL,not-a-price,100.3,10,20\n\
             t3,AAPL,100.2,100.4,5,5\n",
        );
        let tape = load_quotes(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(tape.len(), 2);
        assert_eq!(tape.get(0).unwrap().ts, TimeToken::from("t0"));
        assert_eq!(tape.get(1).unwrap().ts, TimeToken::from("t3"));
        assert_eq!(tape.get(1).unwrap().bid, Decimal::new(1002, 1));
    }

    #[test]
    fn orders_load_with_ids_for_accepted_rows_only() {
        let path = write_file(
            "orders.csv",
            "ts,sym,side,kind,price,qty,tif\n\
             t0,AAPL,buy,limit,100.50,10,GFD\n\
             t1,AAPL,hold,limit,100.50,10,GFD\n\
             t2,AAPL,sell,market,0,25,IOC\n",
        );
        let orders = load_orders(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, OrderId(1));
        assert_eq!(orders[0].side, OrderSide::Buy);
        assert_eq!(orders[0].price, Decimal::new(10050, 2));
        assert_eq!(orders[0].tif, TimeInForce::Gfd);
        // The rejected row does not consume an id.
        assert_eq!(orders[1].id, OrderId(2));
        assert_eq!(orders[1].kind, OrderKind::Market);
        assert_eq!(orders[1].ts, TimeToken::from("t2"));
    }

    #[test]
    fn missing_feed_is_a_feed_open_error() {
        let err = load_quotes("/nonexistent/quotes.csv").unwrap_err();
        assert!(matches!(err, CrosstapeError::FeedOpen { .. }));
    }

    #[test]
    fn fills_export_with_eight_decimal_prices() {
        let fills = vec![Fill {
            order_id: OrderId(3),
            ts: TimeToken::from("t1"),
            price: Decimal::new(1002, 1),
            quantity: 15,
            side: OrderSide::Buy,
            liquidity: LiquidityRole::Taker,
        }];
        let path = temp_path("fills.csv");
        let written = write_fills(&path, &fills).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, 1);
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("ts,order_id,side,px,qty,liq"));
        assert_eq!(lines.next(), Some("t1,3,buy,100.20000000,15,taker"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn export_to_unwritable_path_is_an_export_error() {
        let err = write_fills("/nonexistent/fills.csv", &[]).unwrap_err();
        assert!(matches!(err, CrosstapeError::Export { .. }));
    }
}
