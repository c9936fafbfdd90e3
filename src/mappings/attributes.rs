pub(super) static ATTRIBUTES_1_20_3: [&str; 14] = [
    "minecraft:generic.armor",
    "minecraft:generic.armor_toughness",
    "minecraft:generic.attack_damage",
    "minecraft:generic.attack_knockback",
    "minecraft:generic.attack_speed",
    "minecraft:generic.flying_speed",
    "minecraft:generic.follow_range",
    "minecraft:horse.jump_strength",
    "minecraft:generic.knockback_resistance",
    "minecraft:generic.luck",
    "minecraft:generic.max_absorption",
    "minecraft:generic.max_health",
    "minecraft:generic.movement_speed",
    "minecraft:zombie.spawn_reinforcements",
];
