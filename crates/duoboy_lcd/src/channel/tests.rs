use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use duoboy_common::LCD_WIDTH;

use super::*;
use crate::palette::{Palette, PaletteKey};

#[test]
fn line_is_staged_and_flagged_busy() {
    let (tx, rx) = line_channel(ColorSource::default());
    let pixels = [0x21; LCD_WIDTH];
    tx.enqueue_line(5, &pixels).unwrap();
    assert!(tx.line_in_flight());

    assert_eq!(rx.dequeue_blocking().unwrap(), Some(DisplayCommand::LcdLine(5)));
    rx.with_staged_line(|staged, _| assert_eq!(staged, &pixels));
    rx.ack_line();
    assert!(!tx.line_in_flight());
}

#[test]
fn second_enqueue_blocks_until_first_is_acknowledged() {
    let (tx, rx) = line_channel(ColorSource::default());
    let first = [0x01; LCD_WIDTH];
    let second = [0x22; LCD_WIDTH];
    tx.enqueue_line(0, &first).unwrap();

    let returned = Arc::new(AtomicBool::new(false));
    let producer = {
        let returned = returned.clone();
        thread::spawn(move || {
            tx.enqueue_line(1, &second).unwrap();
            returned.store(true, Ordering::SeqCst);
            tx
        })
    };

    thread::sleep(Duration::from_millis(50));
    assert!(!returned.load(Ordering::SeqCst));

    assert_eq!(rx.dequeue_blocking().unwrap(), Some(DisplayCommand::LcdLine(0)));
    rx.with_staged_line(|staged, _| assert_eq!(staged, &first));
    rx.ack_line();

    let tx = producer.join().unwrap();
    assert!(returned.load(Ordering::SeqCst));
    assert!(tx.line_in_flight());
    assert_eq!(rx.dequeue_blocking().unwrap(), Some(DisplayCommand::LcdLine(1)));
    rx.with_staged_line(|staged, _| assert_eq!(staged, &second));
}

#[test]
fn control_commands_keep_fifo_order() {
    let (tx, rx) = line_channel(ColorSource::default());
    tx.nop().unwrap();
    tx.set_scaling_mode(ScalingMode::StretchKeepAspect).unwrap();
    tx.enqueue_line(143, &[0; LCD_WIDTH]).unwrap();

    assert_eq!(rx.dequeue_blocking().unwrap(), Some(DisplayCommand::Nop));
    assert_eq!(rx.dequeue_blocking().unwrap(), Some(DisplayCommand::IdleSet(2)));
    assert_eq!(rx.dequeue_blocking().unwrap(), Some(DisplayCommand::LcdLine(143)));
}

#[test]
fn colors_are_replaced_between_lines() {
    let (tx, rx) = line_channel(ColorSource::default());
    let palette = crate::palette::color_palette(PaletteKey::new(0x10, 0x01));
    tx.set_colors(ColorSource::Dmg(palette));
    rx.with_staged_line(|_, colors| assert_eq!(colors, &ColorSource::Dmg(palette)));
    assert_ne!(palette, Palette::DMG);
}

#[test]
fn dequeue_fails_once_producer_is_gone() {
    let (tx, rx) = line_channel(ColorSource::default());
    tx.nop().unwrap();
    drop(tx);
    assert_eq!(rx.dequeue_blocking().unwrap(), Some(DisplayCommand::Nop));
    assert!(rx.dequeue_blocking().is_err());
}

#[test]
fn send_fails_once_consumer_is_gone() {
    let (tx, rx) = line_channel(ColorSource::default());
    drop(rx);
    assert!(tx.nop().is_err());
}
