use carousel_core::{Carousel, CarouselError, CarouselOptions, Transition, class};
use carousel_test_support::{FakeHost, capture_logs};

fn infinite_options(visible: usize, scroll: usize) -> CarouselOptions {
    CarouselOptions::default()
        .with_slides_visible(visible)
        .with_slides_to_scroll(scroll)
        .with_infinite(true)
}

fn slide_of(host: &FakeHost, item: carousel_test_support::FakeNode) -> Option<String> {
    host.child_nodes(item)
        .first()
        .and_then(|slide| host.attribute(*slide, "data-slide"))
}

#[test]
fn pads_strip_with_clones_and_starts_on_first_real_item() -> Result<(), CarouselError> {
    let host = FakeHost::desktop();
    let element = host.slides(6);

    let (carousel, logs) =
        capture_logs(|| Carousel::new(host.clone(), &element, infinite_options(3, 2)));
    let carousel = carousel?;

    assert!(!logs.contains("not enough items"));
    assert_eq!(carousel.offset(), 5);
    assert_eq!(carousel.item_count(), 6 + 2 * 5);
    assert_eq!(carousel.current_item(), 5);

    let items = host.find_by_class(class::ITEM);
    let order: Vec<String> = items
        .iter()
        .filter_map(|item| slide_of(&host, *item))
        .collect();
    assert_eq!(
        order,
        [
            "1", "2", "3", "4", "5", "0", "1", "2", "3", "4", "5", "0", "1", "2", "3", "4"
        ]
    );

    let container = host.first_by_class(class::CONTAINER);
    assert_eq!(
        host.style(container, "transform").as_deref(),
        Some("translate3d(-31.25%, 0, 0)")
    );
    assert_eq!(host.style_writes(container, "transition"), vec!["none", ""]);
    Ok(())
}

#[test]
fn short_item_list_warns_but_still_mounts() -> Result<(), CarouselError> {
    let host = FakeHost::desktop();
    let element = host.slides(2);

    let (carousel, logs) =
        capture_logs(|| Carousel::new(host.clone(), &element, infinite_options(3, 2)));
    let carousel = carousel?;

    assert!(logs.contains("WARN"));
    assert!(logs.contains("not enough items in the carousel for infinite mode"));
    assert_eq!(carousel.offset(), 5);
    assert_eq!(carousel.item_count(), 6);
    assert!(carousel.current_item() < carousel.item_count());
    Ok(())
}

#[test]
fn transition_end_rebases_from_leading_clones() -> Result<(), CarouselError> {
    let host = FakeHost::desktop();
    let element = host.slides(6);
    let carousel = Carousel::new(host.clone(), &element, infinite_options(3, 2))?;
    let container = host.first_by_class(class::CONTAINER);

    carousel.prev();
    assert_eq!(carousel.current_item(), 3);
    host.transition_end(container);
    assert_eq!(carousel.current_item(), 3);

    carousel.prev();
    assert_eq!(carousel.current_item(), 1);
    host.transition_end(container);
    assert_eq!(carousel.current_item(), 7);
    assert_eq!(
        host.style_writes(container, "transition"),
        vec!["none", "", "none", ""]
    );
    Ok(())
}

#[test]
fn transition_end_rebases_from_trailing_clones() -> Result<(), CarouselError> {
    let host = FakeHost::desktop();
    let element = host.slides(6);
    let carousel = Carousel::new(host.clone(), &element, infinite_options(3, 2))?;
    let container = host.first_by_class(class::CONTAINER);

    carousel.goto_item(9, Transition::Animated);
    carousel.next();
    assert_eq!(carousel.current_item(), 11);

    host.transition_end(container);
    assert_eq!(carousel.current_item(), 5);
    Ok(())
}

#[test]
fn pagination_covers_real_items_only() -> Result<(), CarouselError> {
    let host = FakeHost::desktop();
    let element = host.slides(6);
    let options = infinite_options(2, 2).with_pagination(true);
    let carousel = Carousel::new(host.clone(), &element, options)?;
    let buttons = host.find_by_class(class::PAGINATION_BUTTON);
    let is_active = |index: usize| host.has_class(buttons[index], class::PAGINATION_BUTTON_ACTIVE);

    assert_eq!(carousel.offset(), 4);
    assert_eq!(buttons.len(), 3);
    assert!(is_active(0));

    host.click(buttons[2]);
    assert_eq!(carousel.current_item(), 8);
    assert!(is_active(2));
    assert!(!is_active(0));

    carousel.next();
    assert_eq!(carousel.current_item(), 10);
    assert!(is_active(0));
    assert!(!is_active(2));
    Ok(())
}

#[test]
fn clones_keep_highlight_when_index_lands_in_leading_padding() -> Result<(), CarouselError> {
    let host = FakeHost::desktop();
    let element = host.slides(6);
    let options = infinite_options(2, 2).with_pagination(true);
    let carousel = Carousel::new(host.clone(), &element, options)?;
    let buttons = host.find_by_class(class::PAGINATION_BUTTON);

    carousel.prev();
    assert_eq!(carousel.current_item(), 2);

    assert!(host.has_class(buttons[0], class::PAGINATION_BUTTON_ACTIVE));
    Ok(())
}
