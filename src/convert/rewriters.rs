use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    AttributeModifiers, Context, Enchantments, FilterableComponent, FilterableString,
    FireworkExplosion, GameProfile, Holder, IdentifierTable, Instrument, LodestoneTracker,
    OwnCompound, OwnList, StructuredDataConverter, WrittenBook, hide_flags, keys,
    put_hide_flag, tag_to_json_string, uuid_to_int_array,
};

pub(crate) fn register_rewriters(converter: &mut StructuredDataConverter) {
    converter.register(keys::DAMAGE, |_, damage, tag| {
        tag.put_int("Damage", *damage);
    });
    converter.register(keys::UNBREAKABLE, |context, _, tag| {
        tag.put_boolean("Unbreakable", true);
        if !context.show_in_tooltip() {
            put_hide_flag(tag, hide_flags::UNBREAKABLE);
        }
    });
    converter.register(keys::CUSTOM_NAME, |_, name, tag| {
        tag.put_string("CustomName", &tag_to_json_string(name));
    });
    converter.register(keys::LORE, |_, lore, tag| {
        tag.put("Lore", OwnList::from_strings(lore.iter().map(tag_to_json_string)));
    });
    converter.register(keys::ENCHANTMENTS, |context, enchantments, tag| {
        convert_enchantments(context, enchantments, tag, false);
    });
    converter.register(keys::STORED_ENCHANTMENTS, |context, enchantments, tag| {
        convert_enchantments(context, enchantments, tag, true);
    });
    converter.register(keys::ATTRIBUTE_MODIFIERS, convert_attribute_modifiers);
    converter.register(keys::CUSTOM_MODEL_DATA, |_, data, tag| {
        tag.put_int("CustomModelData", *data);
    });
    converter.register(keys::HIDE_ADDITIONAL_TOOLTIP, |_, _, tag| {
        put_hide_flag(tag, hide_flags::ADDITIONAL);
    });
    converter.register(keys::REPAIR_COST, |_, cost, tag| {
        tag.put_int("RepairCost", *cost);
    });
    converter.register(keys::DYED_COLOR, |context, color, tag| {
        tag.put_int("color", color.rgb);
        if !context.show_in_tooltip() {
            put_hide_flag(tag, hide_flags::DYE);
        }
    });
    converter.register(keys::MAP_COLOR, |_, color, tag| {
        tag.put_int("MapColor", *color);
    });
    converter.register(keys::MAP_ID, |_, id, tag| {
        tag.put_int("map", *id);
    });
    converter.register(keys::MAP_DECORATIONS, convert_map_decorations);
    converter.register(keys::WRITABLE_BOOK_CONTENT, |_, pages, tag| {
        convert_writable_pages(pages, tag);
    });
    converter.register(keys::WRITTEN_BOOK_CONTENT, convert_written_book);
    converter.register(keys::BASE_COLOR, |_, color, tag| {
        tag.put_int("Base", *color);
    });
    converter.register(keys::CHARGED_PROJECTILES, |context, items, tag| {
        context.put_item_list(tag, "ChargedProjectiles", items);
    });
    converter.register(keys::BUNDLE_CONTENTS, |context, items, tag| {
        context.put_item_list(tag, "Items", items);
    });
    converter.register(keys::LODESTONE_TRACKER, |_, tracker, tag| {
        convert_lodestone_tracker(tracker, tag);
    });
    converter.register(keys::FIREWORKS, |_, fireworks, tag| {
        let mut fireworks_tag = OwnCompound::new();
        fireworks_tag.put_int("Flight", fireworks.flight_duration);
        fireworks_tag.put(
            "Explosions",
            OwnList::from_compounds(fireworks.explosions.iter().map(convert_explosion)),
        );
        tag.put("Fireworks", fireworks_tag);
    });
    converter.register(keys::FIREWORK_EXPLOSION, |_, explosion, tag| {
        tag.put("Explosion", convert_explosion(explosion));
    });
    converter.register(keys::PROFILE, |_, profile, tag| {
        convert_profile(profile, tag);
    });
    converter.register(keys::INSTRUMENT, convert_instrument);
}

/// `id_to_key`, logging the ids it has no name for.
fn legacy_key(table: &IdentifierTable, id: i32) -> Option<&'static str> {
    let key = table.id_to_key(id);
    if key.is_none() {
        debug!(table = table.name(), id, "no legacy identifier, dropping entry");
    }
    key
}

fn convert_enchantments(
    context: &Context<'_>,
    enchantments: &Enchantments,
    tag: &mut OwnCompound,
    stored: bool,
) {
    let table = &context.mappings().enchantments;
    let list = OwnList::from_compounds(enchantments.iter().filter_map(|(id, level)| {
        let identifier = legacy_key(table, id)?;
        let mut enchantment = OwnCompound::new();
        enchantment.put_string("id", identifier);
        enchantment.put_short("lvl", level as i16);
        Some(enchantment)
    }));
    if stored {
        tag.put("StoredEnchantments", list);
    } else {
        tag.put("Enchantments", list);
    }

    if !context.show_in_tooltip() {
        let flag = if stored {
            hide_flags::ADDITIONAL
        } else {
            hide_flags::ENCHANTMENTS
        };
        put_hide_flag(tag, flag);
    }
}

fn convert_attribute_modifiers(
    context: &Context<'_>,
    modifiers: &AttributeModifiers,
    tag: &mut OwnCompound,
) {
    let table = &context.mappings().attributes;
    let list = OwnList::from_compounds(modifiers.modifiers.iter().filter_map(|modifier| {
        let identifier = legacy_key(table, modifier.attribute)?;
        let mut modifier_tag = OwnCompound::new();
        modifier_tag.put_string("AttributeName", identifier);
        modifier_tag.put_string("Name", &modifier.modifier.name);
        modifier_tag.put_double("Amount", modifier.modifier.amount);
        modifier_tag.put_int("Slot", modifier.slot);
        modifier_tag.put_int("Operation", modifier.modifier.operation);
        Some(modifier_tag)
    }));
    tag.put("AttributeModifiers", list);

    if !context.show_in_tooltip() {
        put_hide_flag(tag, hide_flags::ATTRIBUTE_MODIFIERS);
    }
}

fn convert_map_decorations(context: &Context<'_>, decorations: &OwnCompound, tag: &mut OwnCompound) {
    let table = &context.mappings().map_decorations;
    let list = OwnList::from_compounds(decorations.iter().filter_map(|(key, decoration)| {
        let Some(decoration) = decoration.as_compound() else {
            debug!(key = key.as_str(), "map decoration is not a compound, dropping entry");
            return None;
        };
        let kind = decoration.get_string("type").unwrap_or_default();
        let Some(id) = table.key_to_id(kind) else {
            debug!(table = table.name(), kind, "no legacy identifier, dropping entry");
            return None;
        };
        let mut converted = OwnCompound::new();
        converted.put_string("id", key);
        converted.put_int("type", id);
        converted.put_double("x", decoration.get_double("x").unwrap_or_default());
        converted.put_double("z", decoration.get_double("z").unwrap_or_default());
        converted.put_float("rot", decoration.get_float("rotation").unwrap_or_default());
        Some(converted)
    }));
    tag.put("Decorations", list);
}

fn put_pages(tag: &mut OwnCompound, pages: OwnList, filtered: OwnCompound) {
    tag.put("pages", pages);
    tag.put("filtered_pages", filtered);
}

fn convert_writable_pages(pages: &[FilterableString], tag: &mut OwnCompound) {
    let mut filtered = OwnCompound::new();
    for (index, page) in pages.iter().enumerate() {
        if let Some(text) = &page.filtered {
            filtered.put_string(&index.to_string(), text);
        }
    }
    let raw = OwnList::from_strings(pages.iter().map(|page| page.raw.as_str()));
    put_pages(tag, raw, filtered);
}

fn convert_written_pages(pages: &[FilterableComponent], tag: &mut OwnCompound) {
    let mut filtered = OwnCompound::new();
    for (index, page) in pages.iter().enumerate() {
        if let Some(text) = &page.filtered {
            filtered.put_string(&index.to_string(), &tag_to_json_string(text));
        }
    }
    let raw = OwnList::from_strings(pages.iter().map(|page| tag_to_json_string(&page.raw)));
    put_pages(tag, raw, filtered);
}

fn convert_written_book(_: &Context<'_>, book: &WrittenBook, tag: &mut OwnCompound) {
    convert_written_pages(&book.pages, tag);
    tag.put_string("author", &book.author);
    tag.put_int("generation", book.generation);
    tag.put_boolean("resolved", book.resolved);
    tag.put_string("title", &book.title.raw);
    if let Some(title) = &book.title.filtered {
        tag.put_string("filtered_title", title);
    }
}

fn convert_lodestone_tracker(tracker: &LodestoneTracker, tag: &mut OwnCompound) {
    if let Some(pos) = &tracker.pos {
        let mut position = OwnCompound::new();
        position.put_int("X", pos.x);
        position.put_int("Y", pos.y);
        position.put_int("Z", pos.z);
        tag.put("LodestonePos", position);
    }
    tag.put_boolean("LodestoneTracked", tracker.tracked);
    if let Some(pos) = &tracker.pos {
        tag.put_string("LodestoneDimension", &pos.dimension);
    }
}

fn convert_explosion(explosion: &FireworkExplosion) -> OwnCompound {
    let mut tag = OwnCompound::new();
    tag.put_int("Type", explosion.shape);
    tag.put("Colors", explosion.colors.clone());
    tag.put("FadeColors", explosion.fade_colors.clone());
    tag.put_boolean("Trail", explosion.has_trail);
    tag.put_boolean("Flicker", explosion.has_twinkle);
    tag
}

/// A bare name becomes a string `SkullOwner`; anything richer a compound.
fn convert_profile(profile: &GameProfile, tag: &mut OwnCompound) {
    if profile.is_name_only() {
        if let Some(name) = &profile.name {
            tag.put_string("SkullOwner", name);
            return;
        }
    }

    let mut owner = OwnCompound::new();
    if let Some(name) = &profile.name {
        owner.put_string("Name", name);
    }
    if let Some(id) = &profile.id {
        owner.put("Id", uuid_to_int_array(id));
    }
    if !profile.properties.is_empty() {
        // Properties sharing a name share one list.
        let mut grouped: IndexMap<&str, Vec<OwnCompound>> = IndexMap::new();
        for property in &profile.properties {
            let mut value = OwnCompound::new();
            value.put_string("Value", &property.value);
            if let Some(signature) = &property.signature {
                value.put_string("Signature", signature);
            }
            grouped.entry(property.name.as_str()).or_default().push(value);
        }
        let properties: OwnCompound = grouped
            .into_iter()
            .map(|(name, values)| (name, OwnList::from_compounds(values)))
            .collect();
        owner.put("Properties", properties);
    }
    tag.put("SkullOwner", owner);
}

fn convert_instrument(context: &Context<'_>, instrument: &Holder<Instrument>, tag: &mut OwnCompound) {
    let Some(id) = instrument.id() else {
        trace!("inline instrument has no legacy form");
        return;
    };
    if let Some(identifier) = legacy_key(&context.mappings().instruments, id) {
        tag.put_string("instrument", identifier);
    }
}
