//! The bundled opening leg of the journey, from the ruins of Washington DC
//! to Louisville.
//!
//! This content has no route to a victory location. A world file that wants
//! a winnable game must add one.

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::item::Item;
use crate::location::Location;

/// Build the default world.
pub fn default_world() -> Catalog {
    Catalog::new(default_locations(), default_items())
}

fn default_locations() -> BTreeMap<String, Location> {
    let locations = [
        (
            "dc_ruins",
            Location::new(
                "Washington DC Ruins",
                "The skeletal remains of the Capitol dome pierce the smoky sky. Your dual-sport \
                 motorcycle idles among the rubble-strewn streets. The Potomac River glows with \
                 an unnatural green hue to the south. Interstate 66 stretches west toward the \
                 wasteland.",
            )
            .with_exit("west", "highway_66")
            .with_exit("south", "potomac_bridge")
            .with_items(&["gas_can"])
            .with_fuel_cost(2),
        ),
        (
            "highway_66",
            Location::new(
                "Interstate 66 Wasteland",
                "Cracked asphalt stretches endlessly west. Abandoned vehicles rust in the \
                 median, their metal skeletons picked clean by scavengers. Your bike's engine \
                 echoes across the desolate landscape. A side road leads north to an old truck \
                 stop.",
            )
            .with_exit("east", "dc_ruins")
            .with_exit("west", "shenandoah")
            .with_exit("north", "truck_stop")
            .with_items(&["spare_tire"])
            .with_fuel_cost(3),
        ),
        (
            "truck_stop",
            Location::new(
                "Abandoned Truck Stop",
                "Rusted fuel pumps stand like metal tombstones. The convenience store's windows \
                 are shattered, but the structure might still hold supplies. A faded sign reads \
                 'Last Gas for 50 Miles' - if only that were still true.",
            )
            .with_exit("south", "highway_66")
            .with_items(&["fuel_siphon", "canned_food", "road_map"])
            .dangerous()
            .with_fuel_cost(1),
        ),
        (
            "potomac_bridge",
            Location::new(
                "Potomac River Bridge",
                "The bridge spans the irradiated waters below. Geiger counter clicks echo in \
                 your helmet. The metal structure groans ominously in the radioactive wind. Best \
                 not to linger here long.",
            )
            .with_exit("north", "dc_ruins")
            .with_exit("west", "virginia_hills")
            .with_items(&["rad_pills"])
            .dangerous()
            .with_fuel_cost(2),
        ),
        (
            "shenandoah",
            Location::new(
                "Shenandoah Wasteland",
                "What once were the beautiful Blue Ridge Mountains are now twisted, blackened \
                 peaks. Your dual-sport handles the rough terrain well. A hidden valley to the \
                 south might offer shelter.",
            )
            .with_exit("east", "highway_66")
            .with_exit("south", "hidden_valley")
            .with_exit("west", "appalachian_pass")
            .with_items(&["mountain_gear"])
            .with_fuel_cost(4),
        ),
        (
            "hidden_valley",
            Location::new(
                "Hidden Valley Settlement",
                "Smoke rises from chimneys built into hillsides. Survivors have carved out a \
                 life here, trading supplies and information. Your motorcycle draws curious but \
                 wary glances.",
            )
            .with_exit("north", "shenandoah")
            .with_items(&["trade_goods", "fuel_barrel", "repair_kit"])
            .with_fuel_cost(1),
        ),
        (
            "virginia_hills",
            Location::new(
                "Virginia Hills",
                "Rolling hills stretch toward the horizon, dotted with the remains of small \
                 towns. Your bike climbs steadily westward. The air tastes of ash and distant \
                 storms.",
            )
            .with_exit("east", "potomac_bridge")
            .with_exit("west", "appalachian_pass")
            .with_items(&["binoculars"])
            .with_fuel_cost(3),
        ),
        (
            "appalachian_pass",
            Location::new(
                "Appalachian Mountain Pass",
                "The highest point for hundreds of miles. From here you can see the long road \
                 ahead - thousands of miles of wasteland between you and Los Angeles. Your \
                 bike's engine strains against the altitude.",
            )
            .with_exit("east", "shenandoah")
            .with_exit("south", "virginia_hills")
            .with_exit("west", "kentucky_border")
            .with_items(&["high_octane_fuel"])
            .with_fuel_cost(5),
        ),
        (
            "kentucky_border",
            Location::new(
                "Kentucky Border Crossing",
                "A checkpoint from the old world, now manned by raiders who demand tribute from \
                 travelers. Your bike could probably outrun them, but negotiation might be \
                 wiser.",
            )
            .with_exit("east", "appalachian_pass")
            .with_exit("west", "louisville_ruins")
            .with_items(&["ammunition"])
            .dangerous()
            .with_fuel_cost(2),
        ),
        (
            "louisville_ruins",
            Location::new(
                "Louisville Ruins",
                "The Ohio River flows past the skeletal remains of the city. Your destination \
                 of Los Angeles feels impossibly far from here. But your bike is strong, and \
                 the road calls westward.",
            )
            .with_exit("east", "kentucky_border")
            .with_items(&["victory_flag"])
            .with_fuel_cost(1),
        ),
    ];

    locations
        .into_iter()
        .map(|(id, location)| (id.to_string(), location))
        .collect()
}

fn default_items() -> BTreeMap<String, Item> {
    let items = [
        (
            "toolkit",
            Item::new(
                "Motorcycle Toolkit",
                "A well-worn set of tools for maintaining your dual-sport bike. Essential for \
                 survival in the wasteland.",
            )
            .fixed()
            .useable("You perform basic maintenance on your bike, improving its condition.")
            .with_repair(15)
            .with_aliases(&["tools", "wrench", "kit"]),
        ),
        (
            "water_bottle",
            Item::new(
                "Water Bottle",
                "A metal water bottle, dented but functional. Clean water is precious in the \
                 wasteland.",
            )
            .useable("You drink deeply, feeling refreshed and ready to continue.")
            .with_food(10)
            .with_aliases(&["water", "bottle", "drink"]),
        ),
        (
            "jerky",
            Item::new(
                "Beef Jerky",
                "Dried meat that's seen better days, but it's protein and it's yours.",
            )
            .useable("The salty meat gives you energy for the road ahead.")
            .with_food(15)
            .with_aliases(&["meat", "food", "beef"]),
        ),
        (
            "gas_can",
            Item::new(
                "Jerry Can",
                "A red metal gas can, about half full. Fuel is life in the wasteland.",
            )
            .useable("You pour the precious fuel into your bike's tank.")
            .with_fuel(25)
            .with_aliases(&["fuel", "gas", "gasoline", "petrol"]),
        ),
        (
            "spare_tire",
            Item::new(
                "Motorcycle Tire",
                "A knobby dual-sport tire, perfect for your bike. Still has good tread.",
            )
            .useable("You replace a worn tire, improving your bike's handling.")
            .with_repair(20)
            .with_aliases(&["tire", "wheel", "rubber"]),
        ),
        (
            "fuel_siphon",
            Item::new(
                "Fuel Siphon Hose",
                "A length of rubber hose for extracting fuel from abandoned vehicles.",
            )
            .useable("You siphon fuel from a nearby wreck, adding to your reserves.")
            .with_fuel(15)
            .with_aliases(&["siphon", "hose", "tube"]),
        ),
        (
            "canned_food",
            Item::new(
                "Canned Beans",
                "A dented can of beans. The label is faded but it's still sealed.",
            )
            .useable("You eat the beans cold. Not gourmet, but filling.")
            .with_food(25)
            .with_aliases(&["beans", "can", "food"]),
        ),
        (
            "road_map",
            Item::new(
                "Pre-War Road Atlas",
                "A road atlas from before the bombs fell. Some routes may still be passable.",
            )
            .useable("You study the map, planning your route to Los Angeles.")
            .with_aliases(&["map", "atlas", "directions"]),
        ),
        (
            "rad_pills",
            Item::new(
                "Rad-Away Pills",
                "Anti-radiation medication. Essential for traveling through hot zones.",
            )
            .useable("You take a pill, feeling the radiation sickness subside.")
            .with_food(5)
            .with_aliases(&["pills", "medicine", "radaway"]),
        ),
        (
            "mountain_gear",
            Item::new(
                "Climbing Gear",
                "Ropes, pitons, and carabiners. Useful for navigating treacherous terrain.",
            )
            .with_aliases(&["rope", "climbing", "gear"]),
        ),
        (
            "trade_goods",
            Item::new(
                "Trade Supplies",
                "Miscellaneous items valuable for bartering with other survivors.",
            )
            .with_aliases(&["supplies", "barter", "goods"]),
        ),
        (
            "fuel_barrel",
            Item::new(
                "Fuel Barrel",
                "A large barrel of high-quality gasoline. This could get you far.",
            )
            .useable("You fill your tank and spare containers with premium fuel.")
            .with_fuel(50)
            .with_aliases(&["barrel", "drum", "gasoline"]),
        ),
        (
            "repair_kit",
            Item::new(
                "Advanced Repair Kit",
                "Professional-grade tools and parts for major motorcycle repairs.",
            )
            .useable("You perform extensive repairs, bringing your bike back to peak condition.")
            .with_repair(40)
            .with_aliases(&["parts", "kit", "repairs"]),
        ),
        (
            "binoculars",
            Item::new(
                "Military Binoculars",
                "High-quality optics for scouting the road ahead and spotting danger.",
            )
            .useable("You scan the horizon, noting safe routes and potential hazards.")
            .with_aliases(&["scope", "optics", "glasses"]),
        ),
        (
            "high_octane_fuel",
            Item::new(
                "High-Octane Racing Fuel",
                "Premium racing fuel that will make your bike purr like a mountain cat.",
            )
            .useable("Your bike's engine roars with newfound power from the premium fuel.")
            .with_fuel(35)
            .with_aliases(&["racing", "premium", "octane"]),
        ),
        (
            "ammunition",
            Item::new(
                "Ammunition Box",
                "A box of mixed ammunition. Useful for trading or protection.",
            )
            .with_aliases(&["ammo", "bullets", "rounds"]),
        ),
        (
            "victory_flag",
            Item::new(
                "California Republic Flag",
                "A tattered flag from the old California Republic. A symbol of hope and your \
                 destination.",
            )
            .with_aliases(&["flag", "banner", "california"]),
        ),
    ];

    items
        .into_iter()
        .map(|(id, item)| (id.to_string(), item))
        .collect()
}
