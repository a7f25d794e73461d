use criterion::{criterion_group, criterion_main, Criterion};
use flightnet_lib::{
    builtin_network_airports, compare_routes, plan_route, Aircraft, CrewRegion, Network,
    OptimizationMode, RouteRequest,
};
use once_cell::sync::Lazy;
use std::hint::black_box;

static NETWORK: Lazy<Network> = Lazy::new(|| {
    let mut network = Network::new(Aircraft::widebody_long_range(), CrewRegion::India.profile())
        .expect("valid widebody profile");
    network
        .extend_airports(builtin_network_airports().expect("bundled airports parse"))
        .expect("bundled airports are valid");
    network
});
static CHEAPEST_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::cheapest("DEL", "JFK"));
static FASTEST_REQUEST: Lazy<RouteRequest> = Lazy::new(|| RouteRequest::fastest("DEL", "JFK"));
static BALANCED_REQUEST: Lazy<RouteRequest> =
    Lazy::new(|| RouteRequest::new("SYD", "LHR", OptimizationMode::Balanced));

fn benchmark_pathfinding(c: &mut Criterion) {
    let network = &*NETWORK;

    c.bench_function("cheapest_del_jfk", |b| {
        let request = &*CHEAPEST_REQUEST;
        b.iter(|| {
            let route = plan_route(network, request).expect("route exists");
            black_box(route.totals.total_cost)
        });
    });

    c.bench_function("fastest_del_jfk", |b| {
        let request = &*FASTEST_REQUEST;
        b.iter(|| {
            let route = plan_route(network, request).expect("route exists");
            black_box(route.totals.block_time_hours)
        });
    });

    c.bench_function("balanced_syd_lhr", |b| {
        let request = &*BALANCED_REQUEST;
        b.iter(|| {
            let route = plan_route(network, request).expect("route exists");
            black_box(route.stops())
        });
    });

    c.bench_function("compare_del_jfk", |b| {
        b.iter(|| {
            let comparison = compare_routes(network, "DEL", "JFK");
            black_box(comparison.cheapest.path.len() + comparison.fastest.path.len())
        });
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
