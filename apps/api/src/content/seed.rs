//! Built-in listings and success stories served when no content file is configured.

use crate::models::property::PropertyListing;
use crate::models::story::SuccessStory;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub fn seed_properties() -> Vec<PropertyListing> {
    vec![
        PropertyListing {
            id: "1".to_string(),
            title: "The Magnolia Residence".to_string(),
            address: "1245 Oakwood Dr, Tyler, TX".to_string(),
            price: 950,
            beds: 3,
            baths: 2.0,
            sqft: 1450,
            badges: strings(&["Section 8 Approved", "Wheelchair Accessible"]),
            description: "Fully renovated single-family home featuring quartz countertops, new HVAC, and a spacious fenced backyard perfect for families. Located within walking distance of Douglas Elementary School.".to_string(),
            amenities: strings(&["Quartz Countertops", "Fenced Backyard", "Central HVAC", "Dishwasher", "Washer/Dryer Hookups"]),
            school_district: "Tyler ISD".to_string(),
            neighborhood: "Azalea District".to_string(),
            availability_date: "Available Now".to_string(),
        },
        PropertyListing {
            id: "2".to_string(),
            title: "Veterans Harbor".to_string(),
            address: "880 Pine Street, Longview, TX".to_string(),
            price: 875,
            beds: 2,
            baths: 1.5,
            sqft: 1100,
            badges: strings(&["HUD-VASH Preferred", "Near VA Clinic"]),
            description: "Cozy bungalow tailored for veterans. Includes walk-in shower, energy-efficient appliances, and dedicated parking. Quiet neighborhood with community garden nearby.".to_string(),
            amenities: strings(&["Energy Star Appliances", "Dedicated Parking", "Community Garden Access", "Security System"]),
            school_district: "Longview ISD".to_string(),
            neighborhood: "Pine Tree".to_string(),
            availability_date: "October 15, 2023".to_string(),
        },
        PropertyListing {
            id: "3".to_string(),
            title: "Creekview Estate".to_string(),
            address: "300 Cedar Lane, Marshall, TX".to_string(),
            price: 1100,
            beds: 4,
            baths: 2.0,
            sqft: 1800,
            badges: strings(&["Fenced Yard", "New Roof"]),
            description: "Spacious family home with open floor plan. Brand new luxury vinyl plank flooring throughout and modernized kitchen. Features a covered patio and detached garage.".to_string(),
            amenities: strings(&["LVP Flooring", "Covered Patio", "Detached Garage", "Walk-in Closets"]),
            school_district: "Marshall ISD".to_string(),
            neighborhood: "Historic District".to_string(),
            availability_date: "November 1, 2023".to_string(),
        },
        PropertyListing {
            id: "4".to_string(),
            title: "Liberty Row".to_string(),
            address: "405 Freedom Blvd, Tyler, TX".to_string(),
            price: 1050,
            beds: 3,
            baths: 2.0,
            sqft: 1600,
            badges: strings(&["New Construction", "Energy Star"]),
            description: "A complete restoration project turned modern sanctuary. Open concept living area, LED lighting throughout, and a brand new thermal insulation package to keep utility bills low.".to_string(),
            amenities: strings(&["LED Lighting", "Smart Thermostat", "Thermal Insulation", "Open Concept"]),
            school_district: "Tyler ISD".to_string(),
            neighborhood: "Downtown Tyler".to_string(),
            availability_date: "Available Now".to_string(),
        },
        PropertyListing {
            id: "5".to_string(),
            title: "The Patriot Duplex".to_string(),
            address: "220 Victory Lane, Kilgore, TX".to_string(),
            price: 825,
            beds: 2,
            baths: 1.0,
            sqft: 950,
            badges: strings(&["Rapid Rehousing", "Pet Friendly"]),
            description: "Affordable duplex unit recently updated with fresh paint and new appliances. Large shared yard and close to public transit routes.".to_string(),
            amenities: strings(&["Fresh Paint", "Shared Yard", "Pet Friendly", "Transit Access"]),
            school_district: "Kilgore ISD".to_string(),
            neighborhood: "Sycamore Grove".to_string(),
            availability_date: "Waitlist Open".to_string(),
        },
        PropertyListing {
            id: "6".to_string(),
            title: "Freedom Heights".to_string(),
            address: "1500 Independence Dr, Lindale, TX".to_string(),
            price: 1250,
            beds: 3,
            baths: 2.5,
            sqft: 1750,
            badges: strings(&["Family Size", "Top Rated Schools"]),
            description: "Beautiful brick home in the highly sought-after Lindale school district. Features a double vanity, large soaking tub, and a fireplace for cozy evenings.".to_string(),
            amenities: strings(&["Fireplace", "Double Vanity", "Soaking Tub", "Brick Exterior"]),
            school_district: "Lindale ISD".to_string(),
            neighborhood: "Eagle Creek".to_string(),
            availability_date: "December 1, 2023".to_string(),
        },
    ]
}

pub fn seed_stories() -> Vec<SuccessStory> {
    vec![
        SuccessStory::new(
            "Veteran Housing Success Story",
            "How we helped a military family find stable housing in Tyler",
        ),
        SuccessStory::new(
            "Community Revitalization in Longview",
            "Our impact on neighborhood improvement in East Texas",
        ),
        SuccessStory::new(
            "Family-Friendly Rentals",
            "Affordable housing solutions for families with children",
        ),
        SuccessStory::new(
            "Investor Partnership Program",
            "How we work with investors to acquire distressed properties",
        ),
    ]
}
