use delivery_router::models::{OrderRecord, OrderRequest, UserRecord, UserType};
use delivery_router::utils::init_map::{init_network_from_file, DeliveryNetwork};
use delivery_router::{DriverSelector, Location, RouteResult, RouterConfig};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "data/network.json".to_string());

    // init delivery network
    let network = match init_network_from_file(&path) {
        Ok(network) => network,
        Err(e) => {
            warn!(error = %e, "falling back to the built-in city network");
            DeliveryNetwork::default_city()
        }
    };

    let config = match RouterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid router configuration");
            return;
        }
    };

    let users = vec![
        UserRecord::new("admin", UserType::Admin, Location::new(0.0, 0.0)),
        UserRecord::new("customer1", UserType::Customer, Location::new(1.0, 0.0)),
        UserRecord::driver("driver1", Location::new(0.0, 0.0)),
        UserRecord::driver("driver2", Location::new(0.0, 0.0)),
    ];

    // driver1 is still out delivering to Customer 2
    let mut orders = vec![OrderRecord::from_assignment(
        "ORD-0001",
        &OrderRequest::new("customer2", Location::new(-2.0, 0.0)).with_item(2, "Milk", 1),
        &RouteResult::assigned("driver1".to_string(), vec![2]),
    )];

    let order = OrderRequest::new("customer1", Location::new(1.0, 0.0))
        .with_item(1, "Apple", 2)
        .with_item(2, "Coffee", 1)
        .with_item(3, "Tea", 1);

    println!(
        "Customer {} at ({:.1}, {:.1}) needs items from stores {:?}",
        order.customer_id,
        order.customer_location.x,
        order.customer_location.y,
        order.stop_store_ids()
    );

    let selector = DriverSelector::new(&network, &config);

    println!("Candidates considered:");
    for candidate in selector.evaluate_candidates(&order, &users, &orders) {
        println!(
            "  {} (priority {}): {:.1} km via {:?}",
            candidate.driver_id,
            candidate.priority.rank(),
            candidate.total_distance,
            candidate.store_order
        );
    }

    let start_time = std::time::Instant::now();
    let result = selector.assign_driver(&order, &users, &orders);
    let elapsed = start_time.elapsed();

    println!("Assignment (found in {:.2?}):", elapsed);
    println!("------------------------------------------");
    match &result.driver {
        Some(driver) => {
            println!("  Driver: {}", driver);
            println!("  Store visiting order: {:?}", result.store_order);
            orders.push(OrderRecord::from_assignment("ORD-0002", &order, &result));
        }
        None => println!("No driver available; the order stays unassigned."),
    }

    println!("{} order(s) on record", orders.len());
}
