/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;

use appmesh::error::CreateRouteError;
use appmesh::model::{
    DnsServiceDiscovery, EgressFilter, EgressFilterType, HttpRoute, HttpRouteAction,
    HttpRouteMatch, Listener, MeshSpec, PortMapping, PortProtocol, RouteSpec, ServiceDiscovery,
    VirtualNodeServiceProvider, VirtualNodeSpec, VirtualRouterListener, VirtualRouterSpec,
    VirtualServiceProvider, VirtualServiceSpec, WeightedTarget,
};
use appmesh::operation::{
    CreateMesh, CreateRoute, CreateVirtualNode, CreateVirtualRouter, CreateVirtualService,
};
use smithy_types::retry::ProvideErrorKind;
use tracing_subscriber::EnvFilter;

const MESH: &str = "colorapp";

fn http_port(port: i32) -> PortMapping {
    PortMapping::builder()
        .port(port)
        .protocol(PortProtocol::Http)
        .build()
}

fn print_request(operation: &str, body: &impl serde::Serialize) -> Result<(), Box<dyn Error>> {
    println!("{}:\n{}\n", operation, serde_json::to_string_pretty(body)?);
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("appmesh=debug")),
        )
        .init();

    let config = appmesh::Config::from_env();
    tracing::info!(endpoint = %config.endpoint(), version = appmesh::PKG_VERSION, "building requests");

    let mesh = CreateMesh::builder()
        .mesh_name(MESH)
        .spec(
            MeshSpec::builder()
                .egress_filter(
                    EgressFilter::builder()
                        .r#type(EgressFilterType::DropAll)
                        .build(),
                )
                .build(),
        )
        .build(&config)?;
    print_request("CreateMesh", &mesh)?;

    for color in &["blue", "red"] {
        let node = CreateVirtualNode::builder()
            .mesh_name(MESH)
            .virtual_node_name(format!("colorteller-{}", color))
            .spec(
                VirtualNodeSpec::builder()
                    .listeners(Listener::builder().port_mapping(http_port(9080)).build())
                    .service_discovery(ServiceDiscovery::Dns(
                        DnsServiceDiscovery::builder()
                            .hostname(format!("colorteller-{}.{}.local", color, MESH))
                            .build(),
                    ))
                    .build(),
            )
            .build(&config)?;
        print_request("CreateVirtualNode", &node)?;
    }

    let router = CreateVirtualRouter::builder()
        .mesh_name(MESH)
        .virtual_router_name("colorteller-vr")
        .spec(
            VirtualRouterSpec::builder()
                .listeners(
                    VirtualRouterListener::builder()
                        .port_mapping(http_port(9080))
                        .build(),
                )
                .build(),
        )
        .build(&config)?;
    print_request("CreateVirtualRouter", &router)?;

    let route = |blue_weight: i32| {
        CreateRoute::builder()
            .mesh_name(MESH)
            .virtual_router_name("colorteller-vr")
            .route_name("colorteller-route")
            .spec(
                RouteSpec::builder()
                    .http_route(
                        HttpRoute::builder()
                            .r#match(HttpRouteMatch::builder().prefix("/").build())
                            .action(
                                HttpRouteAction::builder()
                                    .weighted_targets(
                                        WeightedTarget::builder()
                                            .virtual_node("colorteller-blue")
                                            .weight(blue_weight)
                                            .build(),
                                    )
                                    .weighted_targets(
                                        WeightedTarget::builder()
                                            .virtual_node("colorteller-red")
                                            .weight(100 - blue_weight)
                                            .build(),
                                    )
                                    .build(),
                            )
                            .build(),
                    )
                    .build(),
            )
            .build(&config)
    };
    print_request("CreateRoute", &route(50)?)?;

    // a weight above 100 never leaves the client
    match route(120) {
        Ok(_) => println!("unexpectedly accepted an out of range weight"),
        Err(err) => println!("rejected CreateRoute: {}\n", err),
    }

    let service = CreateVirtualService::builder()
        .mesh_name(MESH)
        .virtual_service_name(format!("colorteller.{}.local", MESH))
        .spec(
            VirtualServiceSpec::builder()
                .provider(VirtualServiceProvider::VirtualNode(
                    VirtualNodeServiceProvider::builder()
                        .virtual_node_name("colorteller-blue")
                        .build(),
                ))
                .build(),
        )
        .build(&config)?;
    print_request("CreateVirtualService", &service)?;

    let throttled = CreateRouteError::from_code(
        smithy_types::Error::builder()
            .code("TooManyRequestsException")
            .message("Rate exceeded")
            .build(),
    );
    println!(
        "{} (retryable: {})",
        throttled,
        throttled.is_retryable()
    );
    Ok(())
}
