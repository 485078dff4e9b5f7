//! Event commands.

use shoplink_client::ShopLinkClient;
use shoplink_client::endpoints::events::EventFilter;
use shoplink_core::{Event, EventId, EventStatus};

use super::CliError;

#[allow(clippy::print_stdout)]
fn print_event_line(event: &Event) {
    let price = if event.is_free {
        "free".to_owned()
    } else {
        event.ticket_price.to_string()
    };
    println!(
        "#{:<5} {:<35} {} ({}) {} registered",
        event.id, event.title, event.start_date, price, event.registrations_count
    );
}

#[allow(clippy::print_stdout)]
pub async fn list(
    client: &ShopLinkClient,
    status: Option<EventStatus>,
    is_published: Option<bool>,
    limit: Option<u32>,
) -> Result<(), CliError> {
    let filter = EventFilter {
        status,
        is_published,
        limit,
        offset: None,
    };
    let events = client.list_events(&filter).await?;
    if events.is_empty() {
        println!("No events found");
        return Ok(());
    }
    for event in &events {
        print_event_line(event);
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn show(client: &ShopLinkClient, id: EventId) -> Result<(), CliError> {
    let event = client.get_event(id).await?;
    println!("{} (#{})", event.title, event.id);
    if let Some(description) = &event.description {
        println!("{description}");
    }
    println!("starts: {}", event.start_date);
    if let Some(end_date) = &event.end_date {
        println!("ends: {end_date}");
    }
    if let Some(venue) = &event.venue_name {
        println!("venue: {venue}");
    }
    if event.is_free {
        println!("tickets: free");
    } else {
        println!("tickets: {}", event.ticket_price);
    }
    match event.max_attendees {
        Some(max) => println!("registered: {}/{max}", event.registrations_count),
        None => println!("registered: {}", event.registrations_count),
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn register(client: &ShopLinkClient, id: EventId) -> Result<(), CliError> {
    let message = client.register_for_event(id).await?;
    println!("{message}");
    Ok(())
}

#[allow(clippy::print_stdout)]
pub async fn mine(client: &ShopLinkClient) -> Result<(), CliError> {
    let events = client.my_events().await?;
    if events.is_empty() {
        println!("You organize no events yet");
        return Ok(());
    }
    for event in &events {
        print_event_line(event);
    }
    Ok(())
}
