// Banner markers follow dye color order.
pub(super) static MAP_DECORATIONS_1_20_3: [&str; 34] = [
    "minecraft:player",
    "minecraft:frame",
    "minecraft:red_marker",
    "minecraft:blue_marker",
    "minecraft:target_x",
    "minecraft:target_point",
    "minecraft:player_off_map",
    "minecraft:player_off_limits",
    "minecraft:mansion",
    "minecraft:monument",
    "minecraft:banner_white",
    "minecraft:banner_orange",
    "minecraft:banner_magenta",
    "minecraft:banner_light_blue",
    "minecraft:banner_yellow",
    "minecraft:banner_lime",
    "minecraft:banner_pink",
    "minecraft:banner_gray",
    "minecraft:banner_light_gray",
    "minecraft:banner_cyan",
    "minecraft:banner_purple",
    "minecraft:banner_blue",
    "minecraft:banner_brown",
    "minecraft:banner_green",
    "minecraft:banner_red",
    "minecraft:banner_black",
    "minecraft:red_x",
    "minecraft:village_desert",
    "minecraft:village_plains",
    "minecraft:village_savanna",
    "minecraft:village_snowy",
    "minecraft:village_taiga",
    "minecraft:jungle_temple",
    "minecraft:swamp_hut",
];
