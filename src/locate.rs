use crate::{error::Error, pins, sexpr::Node, ComponentRecord, PinFilter, RefDes};

/// Field name holding the manufacturer part number
pub const MPN_FIELD: &str = "Manufacturer Part Number";

/// The `comp` lists of the document's `components` container
pub fn components<'a, 'b>(root: &'b Node<'a>) -> impl Iterator<Item = &'b Node<'a>> {
    root.find_named("components")
        .into_iter()
        .flat_map(|components| components.children("comp"))
}

/// Find the single component with reference `ref_des` and gather its pins.
pub fn find_component<'a>(
    root: &Node<'a>,
    ref_des: &str,
    filter: &PinFilter,
) -> Result<ComponentRecord<'a>, Error> {
    let mut matches = components(root).filter_map(|comp| {
        let found = comp.property_str("ref")?;
        (found == ref_des).then_some((comp, found))
    });
    let Some((comp, found)) = matches.next() else {
        return Err(Error::NotFound(ref_des.to_owned()));
    };
    let others = matches.count();
    if others > 0 {
        return Err(Error::DuplicateRef {
            refdes: ref_des.to_owned(),
            count: others + 1,
        });
    }

    let ref_des = RefDes(found);
    let pins = pins::extract(root, ref_des, filter);
    if pins.is_empty() {
        return Err(Error::NoPins(ref_des.to_string()));
    }

    Ok(ComponentRecord {
        ref_des,
        value: comp.property_str("value"),
        footprint: comp.property_str("footprint"),
        mpn: mpn(comp),
        pins,
    })
}

/// KiCad 9 writes the part number as `(property (name ..) (value ..))`;
/// older exports only carry it in `(fields (field (name ..) "value"))`.
fn mpn<'a>(comp: &Node<'a>) -> Option<&'a str> {
    comp.children("property")
        .filter(|property| property.property_str("name") == Some(MPN_FIELD))
        .find_map(|property| property.property_str("value"))
        .or_else(|| {
            comp.children("fields")
                .flat_map(|fields| fields.children("field"))
                .filter(|field| field.property_str("name") == Some(MPN_FIELD))
                .find_map(|field| field.as_list()?.last()?.as_atom())
        })
}
